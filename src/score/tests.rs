use serde_json::json;

use super::facets::{evaluate_description, evaluate_review, evaluate_size, evaluate_title};
use super::*;
use crate::model::{BodyNode, NodeConnection, PullRequest, Rating};

fn nodes(count: usize) -> NodeConnection {
    NodeConnection {
        nodes: vec![
            BodyNode {
                body: "Looks good".to_string()
            };
            count
        ],
    }
}

#[test]
fn sample_feature_pr_scores_above_baseline() {
    let pr = PullRequest {
        title: "feat: Sample feature PR".to_string(),
        body: Some(
            "Adds the sample feature behind a flag. Why: users asked for staged rollout. \
             How: a new module wires the flag into the existing pipeline."
                .to_string(),
        ),
        changed_files: 8,
        additions: 250,
        deletions: 50,
        reviews: nodes(1),
        comments: nodes(1),
    };

    let analysis = analyze(&pr);

    assert_eq!(analysis.title_quality, Rating::Excellent);
    assert!(analysis.score > 70);
    assert!(!analysis.positive_aspects.is_empty());
}

#[test]
fn empty_pr_leads_with_title_and_description_prompts() {
    let pr = PullRequest::default();

    let analysis = analyze(&pr);

    assert_eq!(analysis.title_quality, Rating::Poor);
    assert_eq!(analysis.description_quality, Rating::Poor);
    assert!(analysis.recommendations[0].contains("title"));
    assert!(analysis.recommendations[1].contains("description"));
}

#[test]
fn score_stays_within_bounds_for_extreme_inputs() {
    let best = PullRequest {
        title: "feat: well formed title".to_string(),
        body: Some(format!(
            "Why: context and rationale. How: implementation approach. Tested end to end. {}",
            "detail ".repeat(80)
        )),
        changed_files: 3,
        additions: 50,
        deletions: 20,
        reviews: nodes(3),
        comments: nodes(10),
    };
    let worst = PullRequest {
        title: String::new(),
        body: Some("wip".to_string()),
        changed_files: 80,
        additions: 9_000,
        deletions: 4_000,
        reviews: nodes(0),
        comments: nodes(0),
    };

    for pr in [best, worst, PullRequest::default()] {
        let analysis = analyze(&pr);
        assert!(analysis.score <= 100);
        assert!(analysis.recommendations.len() <= 3);
        assert!(analysis.positive_aspects.len() <= 3);
    }
}

#[test]
fn analysis_serializes_to_the_wire_shape() {
    let pr = PullRequest {
        title: "fix: null handling in parser".to_string(),
        ..PullRequest::default()
    };

    let value = serde_json::to_value(analyze(&pr)).unwrap();

    assert!(value["score"].is_u64());
    assert_eq!(value["titleQuality"], "Excellent");
    assert!(value["descriptionQuality"].is_string());
    assert!(value["recommendations"].is_array());
    assert!(value["positiveAspects"].is_array());
}

#[test]
fn pull_request_deserializes_from_partial_metadata() {
    let pr: PullRequest = serde_json::from_value(json!({
        "title": "docs: update readme",
        "reviews": {"nodes": [{"body": "ship it"}]},
    }))
    .unwrap();

    let analysis = analyze(&pr);

    assert_eq!(pr.comments.nodes.len(), 0);
    assert!(analysis.score > 0);
}

#[test]
fn title_rewards_length_and_conventional_prefix() {
    assert_eq!(evaluate_title("feat: add staged rollout").delta, 10);
    assert_eq!(evaluate_title("FIX: Uppercase prefix counts").delta, 10);
    assert_eq!(evaluate_title("a plain but long enough title").delta, 5);
}

#[test]
fn title_penalizes_missing_or_short_titles() {
    let missing = evaluate_title("   ");
    assert_eq!(missing.delta, -5);
    assert_eq!(missing.rating, Rating::Poor);

    let short = evaluate_title("tweak");
    assert_eq!(short.delta, -5);
    assert!(short.recommendations[0].contains("10 characters"));
}

#[test]
fn overlong_title_earns_no_length_reward() {
    let long_title = "feat: ".to_string() + &"x".repeat(120);
    // Prefix bonus only.
    assert_eq!(evaluate_title(&long_title).delta, 5);
}

#[test]
fn description_length_bands() {
    assert_eq!(evaluate_description(Some("too short")).delta, -5);
    assert_eq!(evaluate_description(Some(&"a".repeat(60))).delta, 5);
    assert_eq!(evaluate_description(Some(&"a".repeat(500))).delta, 10);
}

#[test]
fn missing_description_recommends_without_scoring() {
    for body in [None, Some(""), Some("   ")] {
        let facet = evaluate_description(body);
        assert_eq!(facet.delta, 0);
        assert_eq!(facet.rating, Rating::Poor);
        assert!(facet.recommendations[0].contains("description"));
    }
}

#[test]
fn description_content_markers_stack() {
    let body = format!(
        "Why: the old path raced. Approach: serialize writes. Validated with a stress run. {}",
        "padding ".repeat(10)
    );
    let facet = evaluate_description(Some(&body));

    // 50..500 band (+5) plus rationale, approach, and testing (+3 each).
    assert_eq!(facet.delta, 14);
    assert_eq!(facet.rating, Rating::Excellent);
    assert!(facet.recommendations.is_empty());
}

#[test]
fn description_without_testing_notes_recommends_them() {
    let body = "This rewires the cache eviction path so entries expire from the tail end.";
    let facet = evaluate_description(Some(body));

    assert!(
        facet
            .recommendations
            .iter()
            .any(|r| r.contains("tested"))
    );
}

#[test]
fn size_thresholds_sit_on_the_documented_boundaries() {
    // 10 files / 500 lines are still acceptable; 11 / 501 are not.
    assert_eq!(evaluate_size(10, 250, 250).delta, 0);
    assert_eq!(evaluate_size(11, 200, 100).delta, -5);
    assert_eq!(evaluate_size(8, 301, 200).delta, -5);
    assert_eq!(evaluate_size(5, 100, 100).delta, 8);
    assert_eq!(evaluate_size(3, 9_000, 1_000).delta, 3 - 5);
}

#[test]
fn size_total_saturates_on_extreme_line_counts() {
    let facet = evaluate_size(3, u32::MAX, u32::MAX);

    assert_eq!(facet.delta, 3 - 5);
    assert_eq!(facet.rating, Rating::Poor);
    assert!(facet.recommendations[0].contains("splitting"));
}

#[test]
fn size_rating_tracks_delta() {
    assert_eq!(evaluate_size(50, 1_000, 0).rating, Rating::Poor);
    assert_eq!(evaluate_size(8, 250, 100).rating, Rating::Good);
    assert_eq!(evaluate_size(2, 40, 10).rating, Rating::Excellent);
}

#[test]
fn review_facet_counts_reviews_and_caps_comment_bonus() {
    let none = evaluate_review(0, 0);
    assert_eq!(none.delta, -5);
    assert!(none.recommendations[0].contains("review"));

    let reviewed = evaluate_review(2, 0);
    assert_eq!(reviewed.delta, 5);
    assert!(reviewed.recommendations[0].contains("feedback"));

    let discussed = evaluate_review(1, 12);
    assert_eq!(discussed.delta, 10);
    assert_eq!(discussed.rating, Rating::Excellent);
    assert!(discussed.positives.iter().any(|p| p.contains("12")));
}

#[test]
fn feedback_lists_truncate_in_evaluator_order() {
    let pr = PullRequest {
        title: String::new(),
        body: None,
        changed_files: 40,
        additions: 800,
        deletions: 300,
        reviews: nodes(0),
        comments: nodes(0),
    };

    let analysis = analyze(&pr);

    assert_eq!(analysis.recommendations.len(), 3);
    assert!(analysis.recommendations[0].contains("title"));
    assert!(analysis.recommendations[1].contains("description"));
    assert!(analysis.recommendations[2].contains("splitting"));
}
