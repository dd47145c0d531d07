use clap::{Parser, Subcommand};
use relver::format_error_with_help;
use relver::installer::Tool;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "relver")]
#[command(about = "Resolve version requests against GitHub releases and install them")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a version request and print the stable version
    Resolve {
        /// `head`, `latest`, a semver version (`0.10.0`, `v0.10.0`) or a release tag
        request: String,
        /// Tool whose releases to search (neovim, vim)
        #[arg(short, long, default_value = "neovim")]
        tool: Tool,
    },
    /// Resolve a version request, then download and unpack the matching asset
    Install {
        /// `head`, `latest`, a semver version (`0.10.0`, `v0.10.0`) or a release tag
        request: String,
        /// Tool to install (neovim, vim)
        #[arg(short, long, default_value = "neovim")]
        tool: Tool,
        /// Regular expression selecting the release asset (overrides the platform default)
        #[arg(short, long)]
        pattern: Option<String>,
    },
    /// Store a GitHub token in the OS keychain
    Login,
    /// Remove the stored GitHub token
    Logout,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Resolve { request, tool } => cli::resolve::run(request, tool).await,
        Commands::Install {
            request,
            tool,
            pattern,
        } => {
            cli::install::run(cli::install::InstallOptions {
                request,
                tool,
                pattern,
            })
            .await
        }
        Commands::Login => cli::login::run(),
        Commands::Logout => cli::logout::run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
