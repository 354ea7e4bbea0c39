use super::FacetScore;
use crate::model::Rating;

const CONVENTIONAL_PREFIXES: [&str; 7] =
    ["feat:", "fix:", "docs:", "style:", "refactor:", "test:", "chore:"];

const RATIONALE_MARKERS: [&str; 5] = ["why", "because", "context", "rationale", "motivation"];
const APPROACH_MARKERS: [&str; 3] = ["how", "approach", "implement"];
const TESTING_MARKERS: [&str; 4] = ["test", "validat", "verif", "qa"];

pub(super) fn evaluate_title(title: &str) -> FacetScore {
    let title = title.trim();
    let mut delta = 0;
    let mut recommendations = Vec::new();
    let mut positives = Vec::new();

    let length = title.chars().count();
    if title.is_empty() {
        delta -= 5;
        recommendations.push("Add a descriptive title to your pull request".to_string());
    } else if length < 10 {
        delta -= 5;
        recommendations
            .push("Use a longer, more descriptive title (at least 10 characters)".to_string());
    } else if length < 100 {
        delta += 5;
    }

    let lowered = title.to_lowercase();
    if CONVENTIONAL_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
    {
        delta += 5;
        positives.push("Title follows the conventional commit format".to_string());
    }

    FacetScore {
        delta,
        rating: rating_from_thresholds(delta, 5, 8),
        recommendations,
        positives,
    }
}

pub(super) fn evaluate_description(body: Option<&str>) -> FacetScore {
    let body = body.unwrap_or_default().trim();
    if body.is_empty() {
        return FacetScore {
            delta: 0,
            rating: Rating::Poor,
            recommendations: vec![
                "Add a description explaining what this change does and why".to_string(),
            ],
            positives: Vec::new(),
        };
    }

    let mut delta = 0;
    let mut recommendations = Vec::new();
    let mut positives = Vec::new();

    let length = body.chars().count();
    if length < 50 {
        delta -= 5;
    } else if length < 500 {
        delta += 5;
    } else {
        delta += 10;
    }

    let lowered = body.to_lowercase();
    if contains_any(&lowered, &RATIONALE_MARKERS) {
        delta += 3;
        positives.push("Explains why the change is needed".to_string());
    }
    if contains_any(&lowered, &APPROACH_MARKERS) {
        delta += 3;
    }
    if contains_any(&lowered, &TESTING_MARKERS) {
        delta += 3;
        positives.push("Describes how the change was tested".to_string());
    } else {
        recommendations.push("Explain how the change was tested".to_string());
    }

    FacetScore {
        delta,
        rating: rating_from_thresholds(delta, 5, 10),
        recommendations,
        positives,
    }
}

pub(super) fn evaluate_size(changed_files: u32, additions: u32, deletions: u32) -> FacetScore {
    let mut delta = 0;
    let mut recommendations = Vec::new();
    let mut positives = Vec::new();

    if changed_files > 10 {
        delta -= 5;
        recommendations.push(format!(
            "Consider splitting this PR; it touches {changed_files} files"
        ));
    } else if changed_files <= 5 {
        delta += 3;
    }

    let total_lines = additions.saturating_add(deletions);
    if total_lines > 500 {
        delta -= 5;
        recommendations.push(format!(
            "Consider splitting this PR into smaller changes ({total_lines} lines changed)"
        ));
    } else if total_lines <= 200 {
        delta += 5;
        positives.push("Compact, reviewable diff".to_string());
    }

    let rating = if delta < 0 {
        Rating::Poor
    } else if delta > 3 {
        Rating::Excellent
    } else {
        Rating::Good
    };

    FacetScore {
        delta,
        rating,
        recommendations,
        positives,
    }
}

pub(super) fn evaluate_review(review_count: usize, comment_count: usize) -> FacetScore {
    let mut delta = 0;
    let mut recommendations = Vec::new();
    let mut positives = Vec::new();

    if review_count == 0 {
        delta -= 5;
        recommendations.push("Request a code review before merging".to_string());
    } else {
        delta += 5;
        positives.push(format!("Received {review_count} review(s)"));
    }

    if comment_count == 0 {
        if review_count > 0 {
            recommendations
                .push("Encourage reviewers to leave more detailed feedback".to_string());
        }
    } else {
        delta += comment_count.min(5) as i32;
        positives.push(format!("Active discussion with {comment_count} comment(s)"));
    }

    FacetScore {
        delta,
        rating: rating_from_thresholds(delta, 5, 8),
        recommendations,
        positives,
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn rating_from_thresholds(delta: i32, good: i32, excellent: i32) -> Rating {
    if delta >= excellent {
        Rating::Excellent
    } else if delta >= good {
        Rating::Good
    } else {
        Rating::Poor
    }
}
