//! Package state: identities, enumeration of the two trees, reconciliation
//! and link creation.
//!
//! Layouts:
//! - cellar: `<cellar>/<name>/<version>/...`
//! - software: `<software>/<name>/<version>/x86_64 -> <cellar>/<name>/<version>`

mod enumerate;
mod identity;
mod linker;
mod normalize;
mod reconcile;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub use enumerate::PackageEnumerator;
pub use identity::PackageIdentity;
pub use linker::{LinkOutcome, Linker};
pub use normalize::identity_from_path;
pub use reconcile::{PackageStatus, partition, reconcile};

/// Name of the link entry inside `<software>/<name>/<version>`.
pub const ARCH_DIR: &str = "x86_64";

/// Installed or linked packages at one point in time.
pub type PackageSet = BTreeSet<PackageIdentity>;

/// The two configured trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roots {
    /// Where packages are installed (`CellarPath`).
    pub cellar: PathBuf,
    /// Where links are created (`SoftwarePath`).
    pub software: PathBuf,
}

impl Roots {
    pub fn new(cellar: impl Into<PathBuf>, software: impl Into<PathBuf>) -> Self {
        Self {
            cellar: cellar.into(),
            software: software.into(),
        }
    }

    /// `<cellar>/<name>/<version>`, the target of a link.
    pub fn cellar_dir(&self, id: &PackageIdentity) -> PathBuf {
        package_dir(&self.cellar, id)
    }

    /// `<software>/<name>/<version>`, the directory holding the link.
    pub fn software_dir(&self, id: &PackageIdentity) -> PathBuf {
        package_dir(&self.software, id)
    }

    /// `<software>/<name>/<version>/x86_64`, the link itself.
    pub fn link_path(&self, id: &PackageIdentity) -> PathBuf {
        self.software_dir(id).join(ARCH_DIR)
    }
}

fn package_dir(root: &Path, id: &PackageIdentity) -> PathBuf {
    root.join(id.name()).join(id.version())
}
