use anyhow::Result;
use crossterm::style::Stylize;
use log::debug;
use std::io::Write;
use std::path::Path;

use crate::package::{PackageEnumerator, PackageStatus, partition, reconcile};
use crate::runtime::Runtime;

use super::load_config;

/// Show every installed package, linked in green and unlinked in red
#[tracing::instrument(skip(runtime))]
pub fn show<R: Runtime>(runtime: R, config_path: Option<&Path>, color: bool) -> Result<()> {
    let config = load_config(&runtime, config_path)?;
    let roots = config.roots();

    let enumerator = PackageEnumerator::new(&runtime, &roots);
    let installed = enumerator.installed();
    let linked = enumerator.linked();

    let statuses = reconcile(&installed, &linked);
    let (linked, unlinked) = partition(&statuses);
    debug!("{} linked, {} unlinked", linked.len(), unlinked.len());

    let mut stdout = std::io::stdout().lock();
    render_status(&mut stdout, &statuses, color)?;
    Ok(())
}

/// Write one line per package.
///
/// Without color the state is spelled out instead.
pub fn render_status<W: Write>(out: &mut W, statuses: &[PackageStatus], color: bool) -> Result<()> {
    if statuses.is_empty() {
        writeln!(out, "No packages installed.")?;
        return Ok(());
    }

    for status in statuses {
        let name = status.identity.to_string();
        match (color, status.linked) {
            (true, true) => writeln!(out, "{}", name.green())?,
            (true, false) => writeln!(out, "{}", name.red())?,
            (false, true) => writeln!(out, "{} (linked)", name)?,
            (false, false) => writeln!(out, "{} (unlinked)", name)?,
        }
    }
    Ok(())
}
