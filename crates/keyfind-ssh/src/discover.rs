// ABOUTME: SSH public key discovery against the user's ~/.ssh directory.
// ABOUTME: Walks a fixed candidate list in priority order and returns the first usable key.

use crate::error::{DiscoveryError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Candidate public key filenames, strongest algorithm first.
///
/// The order is the priority order: the first entry that exists, is
/// readable, and is non-empty wins, even when later entries also exist.
pub const CANDIDATE_KEY_FILES: &[&str] = &[
    "id_ed25519.pub",
    "id_rsa.pub",
    "id_ecdsa.pub",
    "id_dsa.pub",
];

/// A public key discovered on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredKey {
    /// Key file content with leading and trailing whitespace removed.
    pub content: String,
    /// Path of the file the key was read from.
    pub path: PathBuf,
}

/// Get the SSH directory for the current user (~/.ssh).
///
/// Returns `None` if the home directory cannot be resolved.
pub fn default_ssh_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".ssh"))
}

/// Find the current user's SSH public key in `~/.ssh`.
///
/// Resolves the home directory and delegates to [`find_public_key_in`].
///
/// # Errors
/// Returns [`DiscoveryError::DirectoryMissing`] if the home directory cannot
/// be resolved or `~/.ssh` does not exist, and
/// [`DiscoveryError::NoKeyFound`] if no candidate file holds a usable key.
pub fn find_public_key() -> Result<DiscoveredKey> {
    let Some(ssh_dir) = default_ssh_dir() else {
        debug!("home directory could not be resolved");
        return Err(DiscoveryError::DirectoryMissing);
    };
    find_public_key_in(&ssh_dir)
}

/// Find an SSH public key inside an explicit directory.
///
/// Checks [`CANDIDATE_KEY_FILES`] in priority order and returns the first
/// entry that exists, reads as UTF-8 text, and is non-empty after trimming.
/// A candidate that is missing, unreadable, or empty is skipped, never
/// fatal: one broken file must not block discovery of a usable key further
/// down the list. The search stops at the first usable candidate.
///
/// # Errors
/// Returns [`DiscoveryError::DirectoryMissing`] if `ssh_dir` does not exist
/// and [`DiscoveryError::NoKeyFound`] if every candidate is missing,
/// unreadable, or empty.
pub fn find_public_key_in(ssh_dir: &Path) -> Result<DiscoveredKey> {
    if !ssh_dir.exists() {
        debug!(path = %ssh_dir.display(), "SSH directory does not exist");
        return Err(DiscoveryError::DirectoryMissing);
    }

    for candidate in CANDIDATE_KEY_FILES {
        let path = ssh_dir.join(candidate);
        if !path.exists() {
            continue;
        }

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "skipping unreadable candidate");
                continue;
            }
        };

        let content = raw.trim();
        if content.is_empty() {
            debug!(path = %path.display(), "skipping empty candidate");
            continue;
        }

        debug!(path = %path.display(), "found usable public key");
        return Ok(DiscoveredKey {
            content: content.to_string(),
            path,
        });
    }

    Err(DiscoveryError::NoKeyFound)
}
