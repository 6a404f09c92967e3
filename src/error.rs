use std::path::PathBuf;

/// Errors surfaced by configuration loading and the `link` command.
///
/// Command functions return `anyhow::Result`; callers that need to tell the
/// cases apart can `downcast_ref::<Error>()`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{message} (config: {})", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("invalid package '{input}': {reason}, expected <name>-<version>")]
    Parse { input: String, reason: &'static str },

    #[error("{} already exists, refusing to overwrite it", .link.display())]
    LinkConflict { link: PathBuf },

    #[error("failed to {action} {}: {source}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Error::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_message_names_file() {
        let err = Error::config("/opt/brewlink/.brewlink.json", "CellarPath does not exist");
        assert_eq!(
            err.to_string(),
            "CellarPath does not exist (config: /opt/brewlink/.brewlink.json)"
        );
    }

    #[test]
    fn test_filesystem_message_carries_os_error() {
        let err = Error::Filesystem {
            action: "create symlink",
            path: PathBuf::from("/opt/software/foo/1.0/x86_64"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied"),
        };
        let message = err.to_string();
        assert!(message.contains("create symlink"));
        assert!(message.contains("Permission denied"));
    }
}
