//! Request and response records for a transport sitting in front of the
//! engine. Field names follow the service's camelCase JSON contract.
//!
//! Decoding is where input gets validated: [`CareRecommendationRequest::try_into_context`]
//! is the only path from wire data to a [`Context`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Context, CulturalProfile, RecommendationResult, RecommendedItem};

/// Confidence reported for items that arrive without a score.
pub const DEFAULT_CONFIDENCE: f64 = 0.75;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("age must be non-negative, got {0}")]
    NegativeAge(i64),
    #[error("age {0} is out of range")]
    AgeOutOfRange(i64),
    #[error("{0} must not be blank")]
    Blank(&'static str),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalContext {
    pub primary_culture: String,
    #[serde(default)]
    pub secondary_cultures: Vec<String>,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub religious_considerations: Vec<String>,
    #[serde(default)]
    pub sensitive_topics: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareRecommendationRequest {
    pub user_id: String,
    pub age: i64,
    pub diagnosis_stage: String,
    #[serde(default)]
    pub support_needs: Vec<String>,
    pub cultural_context: CulturalContext,
    /// Accepted for compatibility; the engine does not read it.
    #[serde(default)]
    pub history: Vec<serde_json::Value>,
}

impl CareRecommendationRequest {
    pub fn try_into_context(self) -> Result<Context, ValidationError> {
        if self.age < 0 {
            return Err(ValidationError::NegativeAge(self.age));
        }
        let age = u32::try_from(self.age).map_err(|_| ValidationError::AgeOutOfRange(self.age))?;

        non_blank("userId", &self.user_id)?;
        non_blank("diagnosisStage", &self.diagnosis_stage)?;
        non_blank("culturalContext.primaryCulture", &self.cultural_context.primary_culture)?;

        let cc = self.cultural_context;
        let culture = CulturalProfile {
            primary_culture: cc.primary_culture,
            secondary_cultures: cc.secondary_cultures.into_iter().collect(),
            region: cc.region,
            language: cc.language,
            religious_considerations: cc.religious_considerations.into_iter().collect(),
            sensitive_topics: cc.sensitive_topics.into_iter().collect(),
        };

        Ok(Context::new(self.user_id, age, self.diagnosis_stage, culture)
            .with_support_needs(self.support_needs))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMeta {
    pub few_shot_count: usize,
    pub optimized_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareRecommendationResponse {
    pub user_id: String,
    pub items: Vec<CareItem>,
    pub strategy: String,
    pub runtime_ms: u64,
    pub meta: ResponseMeta,
}

impl From<RecommendedItem> for CareItem {
    fn from(item: RecommendedItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            category: item.category,
            tags: item.tags,
            url: item.url,
            confidence: item.confidence,
        }
    }
}

impl From<RecommendationResult> for CareRecommendationResponse {
    fn from(result: RecommendationResult) -> Self {
        Self {
            user_id: result.user_id,
            items: result.items.into_iter().map(CareItem::from).collect(),
            strategy: result.strategy,
            runtime_ms: result.runtime_ms,
            meta: ResponseMeta {
                few_shot_count: result.meta.few_shot_count,
                optimized_count: result.meta.optimized_count,
            },
        }
    }
}

fn non_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Blank(field))
    } else {
        Ok(())
    }
}

fn default_region() -> String {
    "US".into()
}

fn default_language() -> String {
    "en".into()
}

fn default_confidence() -> f64 {
    DEFAULT_CONFIDENCE
}
