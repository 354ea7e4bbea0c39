use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "engcheck",
    version,
    about = "Engineering-practices assessment storage and pull-request scoring"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a pull-request metadata record.
    Score(ScoreArgs),
    /// Record questionnaire responses.
    Respond(RespondArgs),
    /// Summarize the stored assessment state.
    Status(StateArgs),
    /// Copy the current state into the durable backup store.
    Backup(StateArgs),
    /// Restore the assessment state from the durable backup.
    Restore(StateArgs),
    /// Remove the stored assessment state.
    Clear(StateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Path to a JSON pull-request record.
    #[arg(long)]
    pub pr_path: PathBuf,

    /// Write the analysis here instead of stdout.
    #[arg(long)]
    pub output_path: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct StateArgs {
    #[arg(long, default_value = ".cache/engcheck/state")]
    pub state_root: PathBuf,

    #[arg(long, default_value = ".cache/engcheck/backup.sqlite")]
    pub backup_db: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct RespondArgs {
    #[command(flatten)]
    pub state: StateArgs,

    /// Question identifier; repeat together with --value.
    #[arg(long = "question")]
    pub questions: Vec<String>,

    /// Integer response value; repeat together with --question.
    #[arg(long = "value")]
    pub values: Vec<i64>,
}
