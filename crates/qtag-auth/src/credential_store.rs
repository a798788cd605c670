use std::fs;
use std::path::{Path, PathBuf};

use crate::error::AuthError;

const DEFAULT_KEYRING_SERVICE: &str = "qtag-cli";
const CREDENTIALS_FILE_NAME: &str = "credentials";

/// Where a stored password was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    Keyring,
    File,
}

impl CredentialSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyring => "keyring",
            Self::File => "file",
        }
    }
}

/// Password storage for one keyring service and one fallback file.
///
/// The fallback file holds `username\npassword` and is only honored for the
/// username it was written for.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    service: String,
    file: PathBuf,
}

impl CredentialStore {
    #[must_use]
    pub fn new(service: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            service: service.into(),
            file: file.into(),
        }
    }

    /// The per-user store: keyring service `qtag-cli` (or
    /// `QTAG_KEYRING_SERVICE`) and `~/.qtag/credentials`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::CredentialStoreError` if there is no home directory.
    pub fn user_default() -> Result<Self, AuthError> {
        Ok(Self::new(keyring_service(), credentials_path()?))
    }

    /// Store the password for `username` in the OS keychain.
    ///
    /// The keychain write only counts when a fresh entry reads the same
    /// password back; otherwise the password goes to the 0600 fallback file.
    /// On Linux the file is always written as well, since the kernel keyring
    /// is cleared on reboot.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::CredentialStoreError` if the keychain is unusable
    /// and the fallback file cannot be written.
    pub fn store(&self, username: &str, password: &str) -> Result<(), AuthError> {
        match self.store_keyring(username, password) {
            Ok(()) => {
                tracing::debug!(service = %self.service, "password stored in keyring");
                // keyutils entries do not survive a reboot.
                if cfg!(target_os = "linux") {
                    store_file(&self.file, username, password)?;
                }
                Ok(())
            }
            Err(reason) => {
                tracing::warn!(%reason, "keyring not usable; falling back to file");
                store_file(&self.file, username, password)
            }
        }
    }

    /// Load the password for `username`. Priority: keyring → file.
    #[must_use]
    pub fn load(&self, username: &str) -> Option<String> {
        self.load_keyring(username)
            .or_else(|| load_file(&self.file, username))
    }

    /// Delete the stored password from keyring and file.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::CredentialStoreError` if the credentials file cannot be removed.
    pub fn delete(&self, username: &str) -> Result<(), AuthError> {
        // The entry may not exist.
        if let Ok(entry) = keyring::Entry::new(&self.service, username) {
            let _ = entry.delete_credential();
        }
        delete_file(&self.file)
    }

    /// Which tier currently holds the password for `username`.
    #[must_use]
    pub fn detect_source(&self, username: &str) -> Option<CredentialSource> {
        if self.load_keyring(username).is_some() {
            return Some(CredentialSource::Keyring);
        }
        load_file(&self.file, username).map(|_| CredentialSource::File)
    }

    fn store_keyring(&self, username: &str, password: &str) -> Result<(), String> {
        keyring::Entry::new(&self.service, username)
            .and_then(|entry| entry.set_password(password))
            .map_err(|error| error.to_string())?;

        match self.load_keyring(username) {
            Some(stored) if stored == password => Ok(()),
            Some(_) => Err("keyring returned a different password".into()),
            None => Err("keyring did not keep the password".into()),
        }
    }

    fn load_keyring(&self, username: &str) -> Option<String> {
        if username.is_empty() {
            return None;
        }
        keyring::Entry::new(&self.service, username)
            .ok()?
            .get_password()
            .ok()
            .filter(|password| !password.is_empty())
    }
}

/// Returns the keyring service name.
///
/// Defaults to `"qtag-cli"`. Override via `QTAG_KEYRING_SERVICE` env var
/// for testing (e.g., `"qtag-cli-test"`) to avoid touching real credentials.
fn keyring_service() -> String {
    std::env::var("QTAG_KEYRING_SERVICE").unwrap_or_else(|_| DEFAULT_KEYRING_SERVICE.to_string())
}

/// Store the password for `username` in the per-user store.
///
/// # Errors
///
/// See [`CredentialStore::store`].
pub fn store(username: &str, password: &str) -> Result<(), AuthError> {
    CredentialStore::user_default()?.store(username, password)
}

/// Load the password for `username`. Priority: keyring → file (`~/.qtag/credentials`).
#[must_use]
pub fn load(username: &str) -> Option<String> {
    CredentialStore::user_default().ok()?.load(username)
}

/// Delete the stored password for `username` from keyring and file.
///
/// # Errors
///
/// See [`CredentialStore::delete`].
pub fn delete(username: &str) -> Result<(), AuthError> {
    CredentialStore::user_default()?.delete(username)
}

/// Detect which tier the stored password came from (for status display).
#[must_use]
pub fn detect_source(username: &str) -> Option<CredentialSource> {
    CredentialStore::user_default().ok()?.detect_source(username)
}

// --- Private file helpers ---

fn credentials_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".qtag").join(CREDENTIALS_FILE_NAME))
        .ok_or_else(|| {
            AuthError::CredentialStoreError(
                "home directory not found, cannot store credentials".into(),
            )
        })
}

fn store_file(path: &Path, username: &str, password: &str) -> Result<(), AuthError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            AuthError::CredentialStoreError(format!("mkdir {}: {e}", parent.display()))
        })?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
            }
        }
    }
    fs::write(path, format!("{username}\n{password}")).map_err(|e| {
        AuthError::CredentialStoreError(format!("write {}: {e}", path.display()))
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(|e| {
            AuthError::CredentialStoreError(format!("chmod {}: {e}", path.display()))
        })?;
    }

    Ok(())
}

fn load_file(path: &Path, username: &str) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let (owner, password) = content.split_once('\n')?;
    if owner.trim_end_matches('\r') != username {
        tracing::debug!(path = %path.display(), "credentials file belongs to another user");
        return None;
    }
    let password = password.trim_end_matches(['\r', '\n']);
    (!password.trim().is_empty()).then(|| password.to_string())
}

fn delete_file(path: &Path) -> Result<(), AuthError> {
    if path.exists() {
        fs::remove_file(path).map_err(|e| {
            AuthError::CredentialStoreError(format!("failed to delete {}: {e}", path.display()))
        })?;
    }
    Ok(())
}
