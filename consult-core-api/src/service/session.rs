//! Current-user session with an explicit lifecycle.
//!
//! A [`SessionContext`] is created once at start-up from a [`SessionStore`],
//! restoring whichever user was logged in last. `login` and `logout` keep the
//! store in step. Services receive the context explicitly.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{Action, Section, User};
use crate::error::{ApiError, ApiResult};

/// Actor name recorded when nobody is logged in.
pub const UNKNOWN_ACTOR: &str = "unknown";

/// Persistence for the id of the logged-in user.
pub trait SessionStore: Send + Sync {
    fn load_user_id(&self) -> ApiResult<Option<i64>>;
    fn save_user_id(&self, user_id: i64) -> ApiResult<()>;
    fn clear(&self) -> ApiResult<()>;
}

#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    user_id: Mutex<Option<i64>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_id(user_id: i64) -> Self {
        Self {
            user_id: Mutex::new(Some(user_id)),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn load_user_id(&self) -> ApiResult<Option<i64>> {
        let guard = self
            .user_id
            .lock()
            .map_err(|_| ApiError::InternalError("session store lock poisoned".to_string()))?;
        Ok(*guard)
    }

    fn save_user_id(&self, user_id: i64) -> ApiResult<()> {
        let mut guard = self
            .user_id
            .lock()
            .map_err(|_| ApiError::InternalError("session store lock poisoned".to_string()))?;
        *guard = Some(user_id);
        Ok(())
    }

    fn clear(&self) -> ApiResult<()> {
        let mut guard = self
            .user_id
            .lock()
            .map_err(|_| ApiError::InternalError("session store lock poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct PersistedSession {
    #[serde(rename = "currentUserId")]
    current_user_id: i64,
}

/// Keeps the current user id in a small JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSessionStore {
    fn load_user_id(&self) -> ApiResult<Option<i64>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ApiError::InternalError(format!("Failed to read session file: {e}"))),
        };
        let persisted: PersistedSession = serde_json::from_str(&raw)
            .map_err(|e| ApiError::InternalError(format!("Malformed session file: {e}")))?;
        Ok(Some(persisted.current_user_id))
    }

    fn save_user_id(&self, user_id: i64) -> ApiResult<()> {
        let json = serde_json::to_string(&PersistedSession { current_user_id: user_id })
            .map_err(|e| ApiError::InternalError(format!("Failed to encode session: {e}")))?;
        fs::write(&self.path, json)
            .map_err(|e| ApiError::InternalError(format!("Failed to write session file: {e}")))
    }

    fn clear(&self) -> ApiResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::InternalError(format!("Failed to remove session file: {e}"))),
        }
    }
}

/// The logged-in user and the directory they were picked from.
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    users: Vec<User>,
    current: Option<User>,
}

impl SessionContext {
    /// Restores the persisted user if it is still in `users`.
    ///
    /// An unreadable store or an unknown id leaves the session logged out.
    pub fn start(store: Arc<dyn SessionStore>, users: Vec<User>) -> Self {
        let current = match store.load_user_id() {
            Ok(Some(id)) => {
                let found = users.iter().find(|u| u.id == id).cloned();
                if found.is_none() {
                    debug!(user_id = id, "persisted user not in directory, starting logged out");
                }
                found
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "could not restore session, starting logged out");
                None
            }
        };

        Self { store, users, current }
    }

    pub fn login(&mut self, user_id: i64) -> ApiResult<&User> {
        let user = self
            .users
            .iter()
            .find(|u| u.id == user_id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("user {user_id}")))?;

        self.store.save_user_id(user.id)?;
        debug!(user_id = user.id, role = %user.role, "logged in");
        Ok(&*self.current.insert(user))
    }

    pub fn logout(&mut self) -> ApiResult<()> {
        self.store.clear()?;
        if let Some(user) = self.current.take() {
            debug!(user_id = user.id, "logged out");
        }
        Ok(())
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Display name attached to history rows.
    pub fn actor_name(&self) -> &str {
        self.current
            .as_ref()
            .map(|u| u.name.as_str())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNKNOWN_ACTOR)
    }

    pub fn has_permission(&self, section: Section, action: Action) -> bool {
        self.current
            .as_ref()
            .is_some_and(|u| u.role.permits(section, action))
    }

    pub fn require(&self, section: Section, action: Action) -> ApiResult<()> {
        if self.has_permission(section, action) {
            return Ok(());
        }
        let who = self.current.as_ref().map(|u| u.name.as_str()).unwrap_or(UNKNOWN_ACTOR);
        Err(ApiError::PermissionDenied(format!(
            "{who} may not {action:?} {section:?}"
        )))
    }
}
