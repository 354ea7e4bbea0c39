use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One phase of the staged questionnaire.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    PreSeed,
    Seed,
    SeriesA,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageProgress {
    pub completed: Vec<Stage>,
    pub last_accessed: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateMetadata {
    pub last_saved: String,
    pub question_count: usize,
    pub time_spent: i64,
    pub attempt_count: u32,
}

/// The persisted assessment record. Every instance handed to callers carries the
/// current schema version; older stored shapes are migrated before they surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentState {
    pub version: String,
    pub responses: BTreeMap<String, i64>,
    pub current_stage: Option<Stage>,
    pub progress: StageProgress,
    pub metadata: StateMetadata,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Rating {
    Poor,
    Good,
    Excellent,
}

/// Pull-request metadata as handed over by repository collaborators. All fields
/// default so a partial record reads as empty title, no body, zero counts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PullRequest {
    pub title: String,
    pub body: Option<String>,
    pub changed_files: u32,
    pub additions: u32,
    pub deletions: u32,
    pub reviews: NodeConnection,
    pub comments: NodeConnection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeConnection {
    #[serde(default)]
    pub nodes: Vec<BodyNode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BodyNode {
    #[serde(default)]
    pub body: String,
}

/// Scoring engine output, computed fresh per pull request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrAnalysis {
    pub score: u32,
    pub title_quality: Rating,
    pub description_quality: Rating,
    pub recommendations: Vec<String>,
    pub positive_aspects: Vec<String>,
}
