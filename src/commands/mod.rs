use anyhow::Result;
use log::debug;
use std::path::Path;

use crate::{config::Config, runtime::Runtime};

mod link;
mod show;

pub use link::link;
pub use show::{render_status, show};

/// Locate, read and validate the config; both roots must exist.
#[tracing::instrument(skip(runtime))]
pub fn load_config<R: Runtime>(runtime: &R, explicit: Option<&Path>) -> Result<Config> {
    let path = Config::locate(runtime, explicit)?;
    debug!("Using config {:?}", path);
    Ok(Config::load(runtime, &path)?)
}
