//! Client-local session state
//!
//! The source of this tool kept the signed-in user and the saved-scene
//! gallery in ambient browser storage. Here that state is an explicit
//! [`Session`] value with a defined load/save lifecycle against a JSON
//! file: load at startup (missing file means a fresh session), mutate in
//! memory, save on change. Nothing in the session is sent to the backend.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to read or write session file: {0}")]
    Io(#[from] std::io::Error),
    #[error("session file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Store roles a user can sign in under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Associate,
    Manager,
    VisualMerchandiser,
}

impl Role {
    /// Parse the wire tag, as also typed in the `login` command.
    pub fn parse_key(key: &str) -> Option<Self> {
        match key {
            "associate" => Some(Role::Associate),
            "manager" => Some(Role::Manager),
            "visual_merchandiser" => Some(Role::VisualMerchandiser),
            _ => None,
        }
    }
}

/// The signed-in user. Identity is client-local only and is not part of
/// any request contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// One entry in the 3D scene gallery: a named thumbnail capture plus the
/// product codes it featured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedScene {
    pub id: String,
    pub name: String,
    /// Base64-encoded PNG bytes.
    pub thumbnail: String,
    pub timestamp: DateTime<Utc>,
    pub products: Vec<String>,
}

impl SavedScene {
    /// Decode the thumbnail back to raw image bytes.
    pub fn thumbnail_bytes(&self) -> Option<Vec<u8>> {
        BASE64.decode(&self.thumbnail).ok()
    }
}

/// Client-local persisted state: current user and the scene gallery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub current_user: Option<User>,
    #[serde(default)]
    pub saved_scenes: Vec<SavedScene>,
    #[serde(skip)]
    next_scene_seq: u64,
}

impl Session {
    /// Load a session from disk. A missing file yields a fresh session;
    /// an unreadable or corrupt file is an error.
    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        let mut session: Session = serde_json::from_str(&content)?;
        // Keep generated scene ids unique across removals and restarts.
        session.next_scene_seq = session
            .saved_scenes
            .iter()
            .filter_map(|s| s.id.rsplit('-').next()?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Ok(session)
    }

    /// Write the session to disk, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn sign_in(&mut self, user: User) {
        self.current_user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.current_user = None;
    }

    /// Add a scene capture to the gallery and return its id.
    pub fn add_scene(
        &mut self,
        name: impl Into<String>,
        thumbnail_png: &[u8],
        products: Vec<String>,
    ) -> &SavedScene {
        self.next_scene_seq += 1;
        let scene = SavedScene {
            id: format!("scene-{}", self.next_scene_seq),
            name: name.into(),
            thumbnail: BASE64.encode(thumbnail_png),
            timestamp: Utc::now(),
            products,
        };
        self.saved_scenes.push(scene);
        self.saved_scenes.last().expect("scene was just pushed")
    }

    /// Remove a scene by id; unknown ids leave the gallery unchanged.
    pub fn remove_scene(&mut self, id: &str) -> bool {
        let before = self.saved_scenes.len();
        self.saved_scenes.retain(|s| s.id != id);
        self.saved_scenes.len() != before
    }
}
