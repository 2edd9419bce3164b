use crate::candidate::Candidate;
use crate::config::AgeTargetFallback;
use crate::types::{Context, ScoreDetails};

pub const STAGE_WEIGHT: f64 = 0.25;
pub const NEED_WEIGHT: f64 = 0.15;
pub const CULTURE_WEIGHT: f64 = 0.25;
pub const REGION_WEIGHT: f64 = 0.10;
pub const SENSITIVE_PENALTY: f64 = 0.20;
pub const AGE_BONUS_MAX: f64 = 0.15;
/// Years of age gap that cost one unit of score.
pub const AGE_GAP_SCALE: f64 = 500.0;

pub trait Scorer {
    fn score(&self, candidate: &Candidate, context: &Context) -> ScoreDetails;

    fn score_value(&self, details: &ScoreDetails) -> f64 {
        let mut score = 0.0;
        if details.stage_match {
            score += STAGE_WEIGHT;
        }
        for _ in &details.matched_needs {
            score += NEED_WEIGHT;
        }
        if details.culture_match {
            score += CULTURE_WEIGHT;
        }
        if details.region_match {
            score += REGION_WEIGHT;
        }
        if details.sensitive_match {
            score -= SENSITIVE_PENALTY;
        }
        score += details.age_bonus;

        let score = clamp_unit(score);
        debug_assert!((0.0..=1.0).contains(&score), "score {score} out of range [0.0, 1.0]");
        score
    }
}

/// v0: additive tag-overlap heuristic.
#[derive(Debug, Clone, Copy, Default)]
pub struct CareScorer {
    pub age_target_fallback: AgeTargetFallback,
}

impl CareScorer {
    pub fn new(age_target_fallback: AgeTargetFallback) -> Self {
        Self { age_target_fallback }
    }

    fn age_bonus(&self, candidate: &Candidate, context: &Context) -> f64 {
        let target = match (candidate.age_target, self.age_target_fallback) {
            (Some(target), _) => target,
            (None, AgeTargetFallback::MatchContext) => context.age,
            (None, AgeTargetFallback::NoBonus) => return 0.0,
        };
        let gap = (i64::from(context.age) - i64::from(target)).abs() as f64;
        (AGE_BONUS_MAX - gap / AGE_GAP_SCALE).max(0.0)
    }
}

impl Scorer for CareScorer {
    fn score(&self, candidate: &Candidate, context: &Context) -> ScoreDetails {
        let tags = candidate.tag_set();
        let culture = &context.culture;

        let matched_needs = context
            .support_needs
            .iter()
            .filter(|need| tags.contains(need.as_str()))
            .cloned()
            .collect();

        // Flat penalty: one hit or many costs the same.
        let sensitive_match = tags
            .iter()
            .any(|tag| culture.sensitive_topics.contains(*tag));

        ScoreDetails {
            stage_match: tags.contains(context.diagnosis_stage.as_str()),
            matched_needs,
            culture_match: tags.contains(culture.primary_culture.as_str()),
            region_match: tags.contains(culture.region.as_str()),
            sensitive_match,
            age_bonus: self.age_bonus(candidate, context),
        }
    }
}

pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}
