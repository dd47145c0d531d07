use relver::core::credentials::{CredentialStore, GITHUB_TOKEN_KEY};
use relver::core::RelverResult;

pub fn run() -> RelverResult<()> {
    CredentialStore::delete(GITHUB_TOKEN_KEY)?;
    println!("✓ Token removed");
    Ok(())
}
