use anyhow::{Result, bail};
use tracing::info;

use crate::cli::StateArgs;
use crate::commands;

pub fn backup(args: StateArgs) -> Result<()> {
    let mut store = commands::open_store(&args)?;
    if !store.backup() {
        bail!("backup was not written");
    }
    match store.backup_stamp() {
        Some(stamp) => info!(backed_up_at = %stamp, "backup written"),
        None => info!("nothing stored yet, nothing backed up"),
    }
    Ok(())
}

pub fn restore(args: StateArgs) -> Result<()> {
    let mut store = commands::open_store(&args)?;
    if !store.restore_from_backup() {
        bail!("no usable backup to restore from");
    }
    let state = store.load();
    info!(responses = state.responses.len(), "state restored from backup");
    Ok(())
}

pub fn clear(args: StateArgs) -> Result<()> {
    let mut store = commands::open_store(&args)?;
    if !store.clear() {
        bail!("stored state was not removed");
    }
    info!("stored state cleared");
    Ok(())
}
