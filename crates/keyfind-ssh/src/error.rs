// ABOUTME: Error types for SSH public key discovery using thiserror.
// ABOUTME: Two terminal outcomes: the .ssh directory is missing, or nothing usable was found.

use thiserror::Error;

/// Errors that can occur while discovering an SSH public key.
///
/// The display strings are printed verbatim by the CLI after `Error: ` and
/// always spell the directory as `~/.ssh`, never as the resolved absolute
/// path. Resolved paths are visible at debug log level instead.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DiscoveryError {
    /// The `.ssh` directory does not exist under the resolved home
    /// directory, or the home directory could not be resolved at all.
    #[error("SSH directory ~/.ssh does not exist")]
    DirectoryMissing,

    /// The `.ssh` directory exists but no candidate file yielded readable,
    /// non-empty content.
    #[error("No SSH public key found in ~/.ssh/")]
    NoKeyFound,
}

/// Result type alias using DiscoveryError.
pub type Result<T> = std::result::Result<T, DiscoveryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_missing_display() {
        let display = format!("{}", DiscoveryError::DirectoryMissing);
        assert_eq!(display, "SSH directory ~/.ssh does not exist");
    }

    #[test]
    fn test_no_key_found_display() {
        let display = format!("{}", DiscoveryError::NoKeyFound);
        assert_eq!(display, "No SSH public key found in ~/.ssh/");
    }

    #[test]
    fn test_error_debug() {
        let debug_str = format!("{:?}", DiscoveryError::NoKeyFound);
        assert!(debug_str.contains("NoKeyFound"));
    }

    #[test]
    fn test_errors_have_no_source() {
        use std::error::Error;

        // Per-candidate io::Errors are contained inside discovery and never
        // escape, so neither variant carries a source.
        assert!(DiscoveryError::DirectoryMissing.source().is_none());
        assert!(DiscoveryError::NoKeyFound.source().is_none());
    }
}
