use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::app::infrastructure::storage::Storage;

const AUTH_KEY: &str = "admin-auth";
const AUTH_TTL_MS: u64 = 24 * 60 * 60 * 1000;

/// The persisted auth record: a login timestamp valid for 24 hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthMarker {
    timestamp: u64,
    is_admin: bool,
}

/// Gate for the admin surface. One passphrase, one marker, no accounts.
///
/// The passphrase is injected at construction; the marker only makes a
/// reload skip the prompt, it grants nothing on its own.
pub struct AdminAuth {
    storage: Rc<dyn Storage>,
    passphrase: String,
    admin: Cell<bool>,
}

impl AdminAuth {
    /// Load session state, honoring a persisted marker only while it is
    /// fresh. A stale or unreadable marker is removed.
    pub fn load(storage: Rc<dyn Storage>, passphrase: impl Into<String>) -> Self {
        let admin = match read_marker(storage.as_ref()) {
            Some(marker) if marker.is_admin && is_fresh(marker.timestamp, now_ms()) => true,
            Some(_) => {
                storage.remove(AUTH_KEY);
                false
            }
            None => false,
        };
        Self {
            storage,
            passphrase: passphrase.into(),
            admin: Cell::new(admin),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.admin.get()
    }

    /// Check the passphrase; on success write a fresh marker and grant
    /// admin for this session. Returns whether the attempt succeeded.
    pub fn login(&self, passphrase: &str) -> bool {
        if passphrase != self.passphrase {
            return false;
        }
        let marker = AuthMarker {
            timestamp: now_ms(),
            is_admin: true,
        };
        match serde_json::to_string(&marker) {
            Ok(json) => {
                if let Err(e) = self.storage.write(AUTH_KEY, &json) {
                    eprintln!("Failed to persist {AUTH_KEY}: {e}");
                }
            }
            Err(e) => eprintln!("Failed to serialize {AUTH_KEY}: {e}"),
        }
        self.admin.set(true);
        true
    }

    pub fn logout(&self) {
        self.storage.remove(AUTH_KEY);
        self.admin.set(false);
    }
}

fn read_marker(storage: &dyn Storage) -> Option<AuthMarker> {
    let raw = storage.read(AUTH_KEY)?;
    serde_json::from_str(&raw).ok()
}

fn is_fresh(timestamp: u64, now: u64) -> bool {
    now.saturating_sub(timestamp) < AUTH_TTL_MS
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
