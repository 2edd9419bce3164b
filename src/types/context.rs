use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Who is asking. Built once per request and never mutated.
///
/// Constructed either directly or through
/// [`CareRecommendationRequest::try_into_context`](crate::wire::CareRecommendationRequest::try_into_context),
/// which is where malformed input is rejected. The engine itself does not
/// re-validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub user_id: String,
    pub age: u32,
    pub diagnosis_stage: String,
    pub support_needs: BTreeSet<String>,
    pub culture: CulturalProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CulturalProfile {
    pub primary_culture: String,
    pub secondary_cultures: BTreeSet<String>,
    pub region: String,
    pub language: String,
    pub religious_considerations: BTreeSet<String>,
    pub sensitive_topics: BTreeSet<String>,
}

impl CulturalProfile {
    pub fn new(primary_culture: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            primary_culture: primary_culture.into(),
            secondary_cultures: BTreeSet::new(),
            region: region.into(),
            language: "en".into(),
            religious_considerations: BTreeSet::new(),
            sensitive_topics: BTreeSet::new(),
        }
    }

    pub fn with_sensitive_topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sensitive_topics = topics.into_iter().map(Into::into).collect();
        self
    }
}

impl Context {
    pub fn new(
        user_id: impl Into<String>,
        age: u32,
        diagnosis_stage: impl Into<String>,
        culture: CulturalProfile,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            age,
            diagnosis_stage: diagnosis_stage.into(),
            support_needs: BTreeSet::new(),
            culture,
        }
    }

    pub fn with_support_needs<I, S>(mut self, needs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.support_needs = needs.into_iter().map(Into::into).collect();
        self
    }
}
