//! Secret sources consulted by the credential resolver

mod env;
mod secrets_file;

pub use env::{DotenvFileSource, EnvSecretSource};
pub use secrets_file::TomlSecretsFile;

use crate::config::FileCredentialsConfig;
use jargon_application::CredentialResolver;

/// Resolver with the standard lookup order: process environment, the local
/// `.env` file, then the hosted secrets file
pub fn credential_resolver(config: &FileCredentialsConfig) -> CredentialResolver {
    let (key, _) = config.parse_key();
    CredentialResolver::new(key)
        .with_source(EnvSecretSource)
        .with_source(DotenvFileSource::new(&config.env_file))
        .with_source(TomlSecretsFile::new(&config.secrets_file))
}
