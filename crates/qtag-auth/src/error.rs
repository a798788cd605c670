use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not logged in, run `qtag auth login`")]
    NotAuthenticated,

    #[error("credential store error: {0}")]
    CredentialStoreError(String),
}
