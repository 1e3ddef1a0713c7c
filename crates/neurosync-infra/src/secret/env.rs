//! Environment variable credential source.
//!
//! The relay resolves its provider key by variable name (e.g.
//! "OPENAI_API_KEY") on every call, so rotating the variable in a
//! supervisor-managed environment takes effect without a code change.

use secrecy::SecretString;

use neurosync_core::credential::CredentialSource;

/// Reads credentials from the process environment.
///
/// A variable that is unset or not valid Unicode counts as absent.
pub struct EnvCredentialSource;

impl EnvCredentialSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvCredentialSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialSource for EnvCredentialSource {
    async fn get(&self, name: &str) -> Option<SecretString> {
        match std::env::var(name) {
            Ok(val) => Some(SecretString::from(val)),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(_)) => {
                tracing::warn!(variable = %name, "Credential variable is not valid Unicode, ignoring");
                None
            }
        }
    }
}
