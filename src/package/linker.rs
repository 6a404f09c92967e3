use log::{debug, info};
use std::io;
use std::path::PathBuf;

use super::{PackageIdentity, Roots};
use crate::error::Error;
use crate::runtime::Runtime;
use crate::runtime::path::resolve_against;

/// A link created by [`Linker::link`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOutcome {
    pub identity: PackageIdentity,
    /// `<cellar>/<name>/<version>`
    pub source: PathBuf,
    /// `<software>/<name>/<version>/x86_64`
    pub link: PathBuf,
}

/// Creates `x86_64` links for installed packages.
pub struct Linker<'a, R: Runtime> {
    runtime: &'a R,
    roots: &'a Roots,
}

impl<'a, R: Runtime> Linker<'a, R> {
    pub fn new(runtime: &'a R, roots: &'a Roots) -> Self {
        Self { runtime, roots }
    }

    /// Link `identity` into the software tree.
    ///
    /// The cellar entry is not required to exist. An existing link (even a
    /// broken one) is never replaced: linking the same package twice fails.
    /// The link always points at an absolute path, even for relative roots.
    #[tracing::instrument(skip(self))]
    pub fn link(&self, identity: &PackageIdentity) -> Result<LinkOutcome, Error> {
        let source = self.absolute(self.roots.cellar_dir(identity))?;
        let parent = self.roots.software_dir(identity);
        let link = self.roots.link_path(identity);

        debug!("Creating link parent {:?}", parent);
        self.runtime
            .create_dir_all(&parent)
            .map_err(|e| Error::Filesystem {
                action: "create directory",
                path: parent.clone(),
                source: into_io_error(e),
            })?;

        if self.runtime.is_symlink(&link) || self.runtime.exists(&link) {
            return Err(Error::LinkConflict { link });
        }

        debug!("Linking {:?} -> {:?}", link, source);
        if let Err(e) = self.runtime.symlink(&source, &link) {
            let source_err = into_io_error(e);
            // Someone else created it between the check and now
            if source_err.kind() == io::ErrorKind::AlreadyExists {
                return Err(Error::LinkConflict { link });
            }
            return Err(Error::Filesystem {
                action: "create symlink",
                path: link,
                source: source_err,
            });
        }

        info!("Linked {} at {:?}", identity, link);
        Ok(LinkOutcome {
            identity: identity.clone(),
            source,
            link,
        })
    }

    // A relative target would be read relative to the link's own directory
    fn absolute(&self, path: PathBuf) -> Result<PathBuf, Error> {
        if path.is_absolute() {
            return Ok(path);
        }
        let cwd = self
            .runtime
            .current_dir()
            .map_err(|e| Error::Filesystem {
                action: "resolve",
                path: path.clone(),
                source: into_io_error(e),
            })?;
        Ok(resolve_against(&cwd, &path))
    }
}

fn into_io_error(err: anyhow::Error) -> io::Error {
    match err.downcast::<io::Error>() {
        Ok(e) => e,
        Err(other) => io::Error::other(format!("{:#}", other)),
    }
}
