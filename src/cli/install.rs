use relver::core::RelverResult;
use relver::di::ServiceContainer;
use relver::installer::{compile_pattern, Tool};
use relver::resolver::ResolvedVersion;
use std::path::PathBuf;

pub struct InstallOptions {
    pub request: String,
    pub tool: Tool,
    pub pattern: Option<String>,
}

pub async fn run(options: InstallOptions) -> RelverResult<()> {
    let container = ServiceContainer::new()?;
    let (version, bin) = install_with(&container, &options).await?;

    println!("✓ Installed {} {}", options.tool, version);
    println!("  {}", bin.display());

    Ok(())
}

/// Resolve, download and unpack one version, returning the executable path
pub async fn install_with(
    container: &ServiceContainer,
    options: &InstallOptions,
) -> RelverResult<(ResolvedVersion, PathBuf)> {
    // Bad patterns and unsupported platforms fail before any request is made
    let pattern = options.pattern.as_deref().map(compile_pattern).transpose()?;
    let installer = options.tool.installer(pattern)?;

    let mut resolver = container.resolver(installer.repository().clone());
    let resolution = resolver.resolve(&options.request).await?;

    let install_root = container.config().install_dir()?;
    let bin = installer
        .install(&resolver, &resolution.version, &install_root)
        .await?;

    Ok((resolution.version, bin))
}
