pub mod completion;
pub mod config;
pub mod find;
pub mod map;
pub mod nearest;
pub mod products;

use anyhow::Result;

use crate::config::Config;
use crate::session::Navigator;

/// Build the demo store session, seeded with the configured default start
/// node when one is set and valid.
pub fn default_session() -> Result<Navigator> {
    let mut navigator = Navigator::default_store();
    let config = Config::load_or_default();
    if let Some(start) = config.default_start() {
        navigator.set_start(start)?;
    }
    Ok(navigator)
}
