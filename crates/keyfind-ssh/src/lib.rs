// ABOUTME: SSH public key discovery for the keyfind CLI.
// ABOUTME: Finds the first usable key in ~/.ssh following a fixed priority order.

//! # keyfind-ssh
//!
//! SSH public key discovery for the `keyfind` command-line tool.
//!
//! This crate locates the current user's SSH public key by checking a fixed
//! list of well-known filenames inside `~/.ssh`, strongest algorithm first:
//! `id_ed25519.pub`, `id_rsa.pub`, `id_ecdsa.pub`, `id_dsa.pub`.
//!
//! ## Behavior
//!
//! - **Priority order**: the first usable candidate wins; later files are
//!   never consulted once a key is found, regardless of file timestamps.
//! - **Per-file containment**: a candidate that is unreadable or empty is
//!   skipped, not fatal. Only "no `.ssh` directory" and "nothing usable"
//!   surface as errors.
//! - **Read-only**: the filesystem is never written to.
//!
//! ## Example
//!
//! ```no_run
//! match keyfind_ssh::find_public_key() {
//!     Ok(key) => println!("{} (from {})", key.content, key.path.display()),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

mod discover;
mod error;

// Re-export primary types and functions
pub use discover::{
    default_ssh_dir, find_public_key, find_public_key_in, DiscoveredKey, CANDIDATE_KEY_FILES,
};
pub use error::{DiscoveryError, Result};
