use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::ScoreArgs;
use crate::model::PullRequest;
use crate::score;
use crate::util;

pub fn run(args: ScoreArgs) -> Result<()> {
    let raw = fs::read(&args.pr_path)
        .with_context(|| format!("failed to read {}", args.pr_path.display()))?;
    let pr: PullRequest = serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse {}", args.pr_path.display()))?;

    let analysis = score::analyze(&pr);

    info!(
        score = analysis.score,
        title_quality = ?analysis.title_quality,
        description_quality = ?analysis.description_quality,
        recommendations = analysis.recommendations.len(),
        "pull request analyzed"
    );

    match &args.output_path {
        Some(path) => util::write_json_pretty(path, &analysis)?,
        None => {
            let rendered =
                serde_json::to_string_pretty(&analysis).context("failed to serialize analysis")?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}").context("failed to write analysis")?;
        }
    }

    Ok(())
}
