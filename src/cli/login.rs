use dialoguer::Password;
use relver::core::credentials::{CredentialStore, GITHUB_TOKEN_KEY};
use relver::core::{RelverError, RelverResult};

pub fn run() -> RelverResult<()> {
    println!("GitHub Login");
    println!("Create a token at https://github.com/settings/tokens (no scopes needed for public repositories).");
    println!();

    let token = Password::new()
        .with_prompt("Token")
        .interact()
        .map_err(|e| RelverError::Credential(format!("Failed to read token: {}", e)))?;
    let token = token.trim();

    if token.is_empty() {
        return Err(RelverError::Credential("Token cannot be empty".to_string()));
    }

    CredentialStore::store(GITHUB_TOKEN_KEY, token)?;

    println!();
    println!("✓ Token stored securely");

    Ok(())
}
