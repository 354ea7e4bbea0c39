use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use regex::Regex;
use tracing::info;

use crate::cli::RespondArgs;
use crate::commands;

pub fn run(args: RespondArgs) -> Result<()> {
    if args.questions.is_empty() {
        bail!("provide at least one --question/--value pair");
    }
    if args.questions.len() != args.values.len() {
        bail!(
            "got {} questions but {} values",
            args.questions.len(),
            args.values.len()
        );
    }

    let question_id =
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._-]*$").context("failed to compile question id regex")?;
    let mut responses = BTreeMap::new();
    for (question, value) in args.questions.iter().zip(&args.values) {
        if !question_id.is_match(question) {
            bail!("invalid question id: {question}");
        }
        responses.insert(question.clone(), *value);
    }

    let mut store = commands::open_store(&args.state)?;
    if !store.save_responses(&responses) {
        bail!("responses were not persisted");
    }

    let state = store.load();
    info!(
        saved = responses.len(),
        total = state.metadata.question_count,
        attempt = state.metadata.attempt_count,
        "responses recorded"
    );

    Ok(())
}
