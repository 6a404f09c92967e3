use log::debug;
use std::path::{Path, PathBuf};

use super::{ARCH_DIR, PackageIdentity, PackageSet, Roots, identity_from_path};
use crate::runtime::Runtime;

/// Scans the cellar and software trees for package identities.
///
/// Scanning is best-effort: unreadable directories count as empty and
/// entries that do not look like packages are skipped.
pub struct PackageEnumerator<'a, R: Runtime> {
    runtime: &'a R,
    roots: &'a Roots,
}

impl<'a, R: Runtime> PackageEnumerator<'a, R> {
    pub fn new(runtime: &'a R, roots: &'a Roots) -> Self {
        Self { runtime, roots }
    }

    /// Every `<cellar>/<name>/<version>` directory.
    #[tracing::instrument(skip(self))]
    pub fn installed(&self) -> PackageSet {
        let found: PackageSet = self
            .version_dirs(&self.roots.cellar)
            .iter()
            .filter_map(|dir| identity_from_path(dir, &self.roots.cellar))
            .collect();
        debug!("Found {} installed package(s)", found.len());
        found
    }

    /// Every `<software>/<name>/<version>` whose `x86_64` link resolves to
    /// exactly `<cellar>/<name>/<version>`.
    #[tracing::instrument(skip(self))]
    pub fn linked(&self) -> PackageSet {
        // Links are compared after full resolution, so the cellar must be too
        let cellar = self
            .runtime
            .canonicalize(&self.roots.cellar)
            .unwrap_or_else(|_| self.roots.cellar.clone());

        let found: PackageSet = self
            .version_dirs(&self.roots.software)
            .iter()
            .filter_map(|dir| self.linked_identity(dir, &cellar))
            .collect();
        debug!("Found {} linked package(s)", found.len());
        found
    }

    fn linked_identity(&self, version_dir: &Path, cellar: &Path) -> Option<PackageIdentity> {
        let expected = identity_from_path(version_dir, &self.roots.software)?;
        let arch = version_dir.join(ARCH_DIR);

        // 1. the link entry must be there
        if !self.runtime.exists(&arch) {
            if self.runtime.is_symlink(&arch) {
                debug!("{:?} is a broken link, {} is not linked", arch, expected);
            } else {
                debug!("{:?} does not exist, {} is not linked", arch, expected);
            }
            return None;
        }
        if !self.runtime.is_symlink(&arch) {
            debug!("{:?} is not a symlink, {} is not linked", arch, expected);
            return None;
        }

        // 2. resolve it
        let resolved = match self.runtime.canonicalize(&arch) {
            Ok(path) => path,
            Err(e) => {
                debug!("Cannot resolve {:?}: {}", arch, e);
                return None;
            }
        };

        // 3. it must land on the matching cellar entry
        let Some(found) = identity_from_path(&resolved, cellar) else {
            debug!("{:?} resolves to {:?}, outside the cellar", arch, resolved);
            return None;
        };
        if found != expected {
            debug!(
                "{:?} resolves to {} but lives under {}, ignoring",
                arch, found, expected
            );
            return None;
        }
        Some(found)
    }

    /// `<root>/<name>/<version>` directories, two levels deep.
    fn version_dirs(&self, root: &Path) -> Vec<PathBuf> {
        self.subdirs(root)
            .iter()
            .flat_map(|name_dir| self.subdirs(name_dir))
            .collect()
    }

    fn subdirs(&self, dir: &Path) -> Vec<PathBuf> {
        match self.runtime.read_dir(dir) {
            Ok(entries) => entries
                .into_iter()
                .filter(|entry| self.runtime.is_dir(entry))
                .collect(),
            Err(e) => {
                debug!("Cannot read {:?}, treating it as empty: {}", dir, e);
                Vec::new()
            }
        }
    }
}
