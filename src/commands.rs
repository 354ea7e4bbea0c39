use anyhow::Result;

use crate::cli::StateArgs;
use crate::store::{FileAdapter, ResponseStore, SqliteAdapter};

pub mod respond;
pub mod score;
pub mod state_ops;
pub mod status;

pub(crate) type CliStore = ResponseStore<FileAdapter, SqliteAdapter>;

/// Wire the store the way the CLI runs it: file-backed primary under the
/// state root, sqlite durable store for backups.
pub(crate) fn open_store(args: &StateArgs) -> Result<CliStore> {
    let primary = FileAdapter::new(args.state_root.clone());
    let durable = SqliteAdapter::open(&args.backup_db)?;
    Ok(ResponseStore::new(primary, durable))
}
