//! # qtag-auth
//!
//! Password storage for the asset management API login.
//!
//! The password is kept in the OS keychain (`keyring`) under the configured
//! username, with a 0600 file fallback for hosts without a keychain. The
//! username and endpoint live in `qtag-config`.

pub mod credential_store;
pub mod error;

pub use credential_store::{CredentialSource, CredentialStore};
pub use error::AuthError;

/// Resolve the stored password for `username`.
///
/// Priority: keyring → file.
#[must_use]
pub fn resolve_password(username: &str) -> Option<String> {
    credential_store::load(username)
}

/// Clear the stored password for `username`.
///
/// # Errors
///
/// Returns [`AuthError::NotAuthenticated`] when no username is configured,
/// or `AuthError::CredentialStoreError` if the credentials file cannot be removed.
pub fn logout(username: &str) -> Result<(), AuthError> {
    if username.is_empty() {
        return Err(AuthError::NotAuthenticated);
    }
    credential_store::delete(username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logout_without_username_is_not_authenticated() {
        assert!(matches!(logout(""), Err(AuthError::NotAuthenticated)));
    }
}
