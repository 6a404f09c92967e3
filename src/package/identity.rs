//! Package identity parsing: `name-version`.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Separator between name and version in the textual form.
pub const SEPARATOR: char = '-';

/// One installed package build, written as `name-version`.
///
/// Neither part may be empty or contain `-` or `/`, so the textual form
/// always splits back into exactly the same pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageIdentity {
    name: String,
    version: String,
}

impl PackageIdentity {
    /// Build an identity from its two parts, validating both.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();
        let version = version.into();
        let input = format!("{}{}{}", name, SEPARATOR, version);

        if name.is_empty() {
            return Err(Error::Parse {
                input,
                reason: "package name is empty",
            });
        }
        if version.is_empty() {
            return Err(Error::Parse {
                input,
                reason: "package version is empty",
            });
        }
        if name.contains(SEPARATOR) || version.contains(SEPARATOR) {
            return Err(Error::Parse {
                input,
                reason: "exactly one '-' is allowed",
            });
        }
        if name.contains('/') || version.contains('/') {
            return Err(Error::Parse {
                input,
                reason: "'/' is not allowed",
            });
        }
        if [name.as_str(), version.as_str()]
            .iter()
            .any(|part| *part == "." || *part == "..")
        {
            return Err(Error::Parse {
                input,
                reason: "'.' and '..' are not package names",
            });
        }

        Ok(Self { name, version })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, SEPARATOR, self.version)
    }
}

impl FromStr for PackageIdentity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(SEPARATOR).collect();
        match parts.as_slice() {
            [name, version] => PackageIdentity::new(*name, *version).map_err(|e| match e {
                // Report against what the user typed, not the rebuilt string
                Error::Parse { reason, .. } => Error::Parse {
                    input: s.to_string(),
                    reason,
                },
                other => other,
            }),
            [_] => Err(Error::Parse {
                input: s.to_string(),
                reason: "missing '-' between name and version",
            }),
            _ => Err(Error::Parse {
                input: s.to_string(),
                reason: "exactly one '-' is allowed",
            }),
        }
    }
}
