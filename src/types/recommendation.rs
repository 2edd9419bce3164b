use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;

/// Label reported on every result; names both contributing strategies.
pub const STRATEGY_LABEL: &str = "BootstrapFewShot+BayesianOptimization";

/// Decimal places kept on externally visible confidences.
pub const CONFIDENCE_DECIMALS: usize = 3;

/// Internal: a candidate with the score it earned for one context.
/// Borrows the catalog record; the record itself is never touched.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a Candidate,

    /// Final value used for ordering, in [0.0, 1.0].
    pub score: f64,
    pub details: ScoreDetails,

    /// Temperature-scaled prior added on top of the base score. Zero for
    /// single-pass scoring.
    pub exploration_bonus: f64,
}

/// Internal: per-term breakdown of a base score, before clamping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreDetails {
    pub stage_match: bool,
    pub matched_needs: Vec<String>,
    pub culture_match: bool,
    pub region_match: bool,
    pub sensitive_match: bool,
    pub age_bonus: f64,
}

/// A recommended item as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    pub confidence: f64,

    pub why: RecommendationWhy,
}

/// Explanation for why an item received its confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationWhy {
    pub stage_match: bool,
    pub matched_needs: Vec<String>,
    pub culture_match: bool,
    pub region_match: bool,
    pub sensitive_penalty: bool,
    pub age_bonus: f64,
    pub exploration_bonus: f64,
}

/// Metadata describing how the ranking was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationMetadata {
    pub few_shot_count: usize,
    pub optimized_count: usize,

    pub candidates_considered: usize,
    pub pool_version: String,
}

/// The final result of one `recommend` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub user_id: String,
    pub items: Vec<RecommendedItem>,
    pub strategy: String,
    pub runtime_ms: u64,
    pub meta: RecommendationMetadata,
}

impl ScoredCandidate<'_> {
    /// Cross the output boundary: copy the record out and round confidences.
    pub fn to_item(&self) -> RecommendedItem {
        let c = self.candidate;
        RecommendedItem {
            id: c.id.as_str().to_string(),
            title: c.title.clone(),
            description: c.description.clone(),
            category: c.category.clone(),
            tags: c.tags.clone(),
            url: c.url.clone(),
            confidence: round_confidence(self.score),
            why: RecommendationWhy {
                stage_match: self.details.stage_match,
                matched_needs: self.details.matched_needs.clone(),
                culture_match: self.details.culture_match,
                region_match: self.details.region_match,
                sensitive_penalty: self.details.sensitive_match,
                age_bonus: round_confidence(self.details.age_bonus),
                exploration_bonus: round_confidence(self.exploration_bonus),
            },
        }
    }
}

/// Round to the nearest value with `CONFIDENCE_DECIMALS` decimals.
///
/// Goes through decimal formatting, which rounds the exact binary value;
/// scaling by 1000 first would round `0.0045` up to `0.005`.
pub fn round_confidence(value: f64) -> f64 {
    format!("{:.*}", CONFIDENCE_DECIMALS, value)
        .parse()
        .unwrap_or(value)
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Invalid iteration count: {0} (at least one round is required)")]
    InvalidIterations(usize),

    #[error("Pool version could not be computed: {0}")]
    PoolVersion(#[from] serde_json::Error),
}
