use crate::model::{PrAnalysis, PullRequest, Rating};

mod facets;
#[cfg(test)]
mod tests;

/// Neutral starting score before any facet adjustment.
const BASELINE_SCORE: i32 = 70;
/// At most this many recommendations and positives survive aggregation.
const MAX_FEEDBACK_ITEMS: usize = 3;

/// Output of one facet evaluator: a signed score adjustment plus the
/// human-readable feedback it contributes.
#[derive(Debug, Clone)]
pub(crate) struct FacetScore {
    pub delta: i32,
    pub rating: Rating,
    pub recommendations: Vec<String>,
    pub positives: Vec<String>,
}

/// Score a pull request. Runs the four facet evaluators over immutable input
/// and folds their results into one bounded analysis; deterministic for a
/// given record and total for any input, including fully empty records.
pub fn analyze(pr: &PullRequest) -> PrAnalysis {
    let title = facets::evaluate_title(&pr.title);
    let description = facets::evaluate_description(pr.body.as_deref());
    let size = facets::evaluate_size(pr.changed_files, pr.additions, pr.deletions);
    let review = facets::evaluate_review(pr.reviews.nodes.len(), pr.comments.nodes.len());

    let facet_order = [&title, &description, &size, &review];
    let total: i32 = BASELINE_SCORE + facet_order.iter().map(|facet| facet.delta).sum::<i32>();

    let recommendations = collect_feedback(facet_order.map(|facet| facet.recommendations.as_slice()));
    let positive_aspects = collect_feedback(facet_order.map(|facet| facet.positives.as_slice()));

    PrAnalysis {
        score: total.clamp(0, 100) as u32,
        title_quality: title.rating,
        description_quality: description.rating,
        recommendations,
        positive_aspects,
    }
}

/// Concatenate one feedback list per facet in evaluator order, dropping
/// blanks and truncating to the surfaced maximum.
fn collect_feedback(lists: [&[String]; 4]) -> Vec<String> {
    lists
        .into_iter()
        .flatten()
        .filter(|item| !item.trim().is_empty())
        .take(MAX_FEEDBACK_ITEMS)
        .cloned()
        .collect()
}
