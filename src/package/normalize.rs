use log::debug;
use std::path::{Component, Path};

use super::PackageIdentity;
use crate::runtime::{is_path_under, normalize_path};

/// Recover the identity of `root/<name>/<version>`.
///
/// Returns `None` for anything that is not exactly two levels below `root`,
/// or whose name/version is not a valid identity part.
pub fn identity_from_path(path: &Path, root: &Path) -> Option<PackageIdentity> {
    let path = normalize_path(path);
    let root = normalize_path(root);
    if !is_path_under(&path, &root) {
        debug!("{:?} is not under {:?}, skipping", path, root);
        return None;
    }

    let relative = path.strip_prefix(&root).ok()?;
    let segments: Vec<&str> = relative
        .components()
        .map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;

    let [name, version] = segments.as_slice() else {
        debug!(
            "{:?} has {} segment(s) below {:?}, expected <name>/<version>",
            path,
            segments.len(),
            root
        );
        return None;
    };

    match PackageIdentity::new(*name, *version) {
        Ok(id) => Some(id),
        Err(e) => {
            debug!("Skipping {:?}: {}", path, e);
            None
        }
    }
}
