use anyhow::Result;
use std::path::Path;

use crate::package::{Linker, PackageIdentity};
use crate::runtime::Runtime;

use super::load_config;

/// Link an installed `name-version` into the software tree
#[tracing::instrument(skip(runtime))]
pub fn link<R: Runtime>(
    runtime: R,
    package: &PackageIdentity,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(&runtime, config_path)?;
    let roots = config.roots();

    let outcome = Linker::new(&runtime, &roots).link(package)?;

    println!(
        "The link has been created. {} -> {}",
        outcome.link.display(),
        outcome.source.display()
    );
    Ok(())
}
