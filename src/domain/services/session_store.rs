#[cfg(test)]
#[path = "session_store_test.rs"]
mod tests;

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use chrono::SecondsFormat;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
struct SessionData {
    token: Option<String>,
    role: Option<String>,
    saved_at: Option<String>,
}

/// The session on disk: the bearer token and role issued at login.
/// Reads re-derive state from the file every time, so a fresh process
/// observes the same session until it is explicitly cleared. Token
/// contents are never validated client side; an expired token is only
/// discovered when the backend rejects a request.
#[derive(Clone)]
pub struct SessionStore {
    pub file_path: PathBuf,
}

impl Default for SessionStore {
    fn default() -> SessionStore {
        return SessionStore::new(PathBuf::from(Config::get(ConfigKey::SessionFile)));
    }
}

impl SessionStore {
    pub fn new(file_path: PathBuf) -> SessionStore {
        return SessionStore { file_path };
    }

    fn read(&self) -> SessionData {
        let contents = match fs::read_to_string(&self.file_path) {
            Ok(contents) => contents,
            Err(_) => return SessionData::default(),
        };

        // An unreadable session file is treated as logged out rather
        // than a fatal error. The next login rewrites it.
        return serde_json::from_str(&contents).unwrap_or_default();
    }

    pub fn login(&self, token: &str, role: &str) -> Result<()> {
        let data = SessionData {
            token: Some(token.to_string()),
            role: Some(role.to_string()),
            saved_at: Some(Local::now().to_rfc3339_opts(SecondsFormat::Secs, false)),
        };

        if let Some(parent) = self.file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.file_path, serde_json::to_string(&data)?)?;
        return Ok(());
    }

    /// Clearing an already empty session is a no-op.
    pub fn logout(&self) -> Result<()> {
        if !self.file_path.exists() {
            return Ok(());
        }

        fs::remove_file(&self.file_path)?;
        return Ok(());
    }

    pub fn token(&self) -> Option<String> {
        return self.read().token.filter(|token| return !token.is_empty());
    }

    pub fn role(&self) -> Option<String> {
        return self.read().role;
    }

    pub fn is_authenticated(&self) -> bool {
        return self.token().is_some();
    }

    pub fn is_admin(&self) -> bool {
        return self.role().as_deref() == Some("admin");
    }
}
