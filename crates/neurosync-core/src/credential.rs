//! Credential source trait definition.

use secrecy::SecretString;

/// Resolves a named credential (e.g. "OPENAI_API_KEY") at call time.
///
/// The relay asks on every invocation so a rotated value is picked up without
/// a restart. Returns `None` when the credential is absent.
pub trait CredentialSource: Send + Sync {
    fn get(&self, name: &str) -> impl std::future::Future<Output = Option<SecretString>> + Send;
}
