use anyhow::Result;
use tracing::info;

use crate::cli::StateArgs;
use crate::commands;

pub fn run(args: StateArgs) -> Result<()> {
    let mut store = commands::open_store(&args)?;
    let state = store.load();

    info!(
        version = %state.version,
        responses = state.responses.len(),
        stage = ?state.current_stage,
        stages_completed = state.progress.completed.len(),
        last_accessed = %state.progress.last_accessed,
        last_saved = %state.metadata.last_saved,
        attempts = state.metadata.attempt_count,
        time_spent_secs = state.metadata.time_spent,
        "assessment state"
    );

    match store.backup_stamp() {
        Some(stamp) => info!(backed_up_at = %stamp, "durable backup present"),
        None => info!("no durable backup recorded"),
    }

    Ok(())
}
