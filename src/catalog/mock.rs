use crate::candidate::{Candidate, CandidatePool};
use crate::types::Context;

/// Minimum audience age of the nutrition guide.
const ADULT_AGE: u32 = 18;

/// The built-in four-item catalog, tag-templated from the requester.
///
/// Every item carries the context's own stage, needs, primary culture and
/// region, so all of them score well; the category tags are what tells
/// them apart.
pub fn mock_candidates(context: &Context) -> CandidatePool {
    let mut base_tags: Vec<String> = Vec::with_capacity(context.support_needs.len() + 3);
    base_tags.push(context.diagnosis_stage.clone());
    base_tags.extend(context.support_needs.iter().cloned());
    base_tags.push(context.culture.primary_culture.clone());
    base_tags.push(context.culture.region.clone());

    let tagged = |extra: &[&str]| -> Vec<String> {
        base_tags
            .iter()
            .cloned()
            .chain(extra.iter().map(|t| t.to_string()))
            .collect()
    };

    CandidatePool::new(vec![
        Candidate::new(
            "guide-healthy-eating",
            "Healthy Eating During Treatment",
            "Nutrition tips tailored for your journey.",
            "education",
        )
        .with_tags(tagged(&["health_education"]))
        .with_age_target(context.age.max(ADULT_AGE)),
        Candidate::new(
            "support-community",
            "Community Support Group",
            "Find culturally aligned support circles.",
            "community",
        )
        .with_tags(tagged(&["emotional_support", "community"]))
        .with_age_target(context.age),
        Candidate::new(
            "mindfulness-breathing",
            "Mindfulness and Breathing",
            "Manage stress with guided exercises.",
            "wellness",
        )
        .with_tags(tagged(&["mindfulness", "stress_management"]))
        .with_age_target(context.age),
        Candidate::new(
            "care-navigator",
            "Care Navigator",
            "Personalized care navigation.",
            "navigation",
        )
        .with_tags(tagged(&["care_navigation"]))
        .with_age_target(context.age),
    ])
}
