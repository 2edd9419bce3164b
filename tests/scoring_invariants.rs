use care_rank::candidate::Candidate;
use care_rank::config::AgeTargetFallback;
use care_rank::selection::{CareScorer, Scorer};
use care_rank::types::{round_confidence, Context, CulturalProfile};

const EPS: f64 = 1e-9;

fn make_context() -> Context {
    Context::new("u-1", 40, "stage_1", CulturalProfile::new("somali", "MN"))
        .with_support_needs(["nutrition", "peer_support"])
}

fn make_candidate(id: &str, tags: &[&str]) -> Candidate {
    Candidate::new(id, "Title", "Description", "education").with_tags(tags.iter().copied())
}

fn value(scorer: &CareScorer, candidate: &Candidate, context: &Context) -> f64 {
    let details = scorer.score(candidate, context);
    scorer.score_value(&details)
}

#[test]
fn invariant_score_bounded() {
    let context = make_context().with_support_needs(["a", "b", "c", "d", "e", "f", "g"]);
    let scorer = CareScorer::default();

    let everything = make_candidate(
        "max",
        &["stage_1", "somali", "MN", "a", "b", "c", "d", "e", "f", "g"],
    );
    let nothing = make_candidate("min", &[]).with_age_target(1_000);

    let sensitive_context = make_context().with_support_needs(Vec::<String>::new());
    let sensitive_context = Context {
        culture: sensitive_context.culture.with_sensitive_topics(["grief"]),
        ..sensitive_context
    };
    let penalized = make_candidate("neg", &["grief"]).with_age_target(1_000);

    let high = value(&scorer, &everything, &context);
    let low = value(&scorer, &nothing, &context);
    let clamped = value(&scorer, &penalized, &sensitive_context);

    assert_eq!(high, 1.0, "overshoot must clamp to 1.0");
    assert_eq!(low, 0.0);
    assert_eq!(clamped, 0.0, "negative sums must clamp to 0.0");
}

#[test]
fn invariant_score_is_pure() {
    let context = make_context();
    let scorer = CareScorer::default();
    let candidate = make_candidate("c", &["stage_1", "nutrition", "MN"]).with_age_target(55);

    let first = scorer.score(&candidate, &context);
    for _ in 0..10 {
        assert_eq!(scorer.score(&candidate, &context), first);
    }
}

#[test]
fn stage_match_adds_at_least_quarter() {
    let context = make_context();
    let scorer = CareScorer::default();

    let with_stage = make_candidate("a", &["stage_1", "unrelated"]);
    let without_stage = make_candidate("b", &["stage_9", "unrelated"]);

    let diff = value(&scorer, &with_stage, &context) - value(&scorer, &without_stage, &context);
    assert!(diff >= 0.25 - EPS, "stage bonus too small: {diff}");
}

#[test]
fn sensitive_topic_costs_exactly_point_two() {
    let base = make_context();
    let context = Context {
        culture: base.culture.clone().with_sensitive_topics(["alcohol", "fasting"]),
        ..base
    };
    let scorer = CareScorer::default();

    // Both stay well inside (0, 1) so clamping plays no part.
    let clean = make_candidate("clean", &["stage_1", "somali", "recipes"]);
    let flagged = make_candidate("flagged", &["stage_1", "somali", "alcohol", "fasting"]);

    let clean_details = scorer.score(&clean, &context);
    let flagged_details = scorer.score(&flagged, &context);
    assert!(!clean_details.sensitive_match);
    assert!(flagged_details.sensitive_match);

    let diff = scorer.score_value(&clean_details) - scorer.score_value(&flagged_details);
    assert!((diff - 0.20).abs() < EPS, "penalty must be flat 0.20, got {diff}");
}

#[test]
fn each_support_need_adds_its_own_bonus() {
    let context = make_context();
    let scorer = CareScorer::default();

    let one = make_candidate("one", &["nutrition"]);
    let two = make_candidate("two", &["nutrition", "peer_support"]);
    let repeated = make_candidate("rep", &["nutrition", "nutrition"]);

    let v_one = value(&scorer, &one, &context);
    let v_two = value(&scorer, &two, &context);
    let v_rep = value(&scorer, &repeated, &context);

    assert!((v_two - v_one - 0.15).abs() < EPS);
    assert!((v_rep - v_one).abs() < EPS, "repeated tags match as a set");
    assert_eq!(scorer.score(&two, &context).matched_needs, vec!["nutrition", "peer_support"]);
}

#[test]
fn culture_and_region_bonuses() {
    let context = make_context();
    let scorer = CareScorer::default();

    let plain = make_candidate("plain", &[]);
    let culture = make_candidate("culture", &["somali"]);
    let region = make_candidate("region", &["MN"]);

    let v_plain = value(&scorer, &plain, &context);
    assert!((value(&scorer, &culture, &context) - v_plain - 0.25).abs() < EPS);
    assert!((value(&scorer, &region, &context) - v_plain - 0.10).abs() < EPS);
}

#[test]
fn age_bonus_decays_with_gap() {
    let context = make_context();
    let scorer = CareScorer::default();

    let exact = make_candidate("exact", &[]).with_age_target(40);
    let ten_off = make_candidate("ten", &[]).with_age_target(30);
    let far = make_candidate("far", &[]).with_age_target(140);

    assert!((scorer.score(&exact, &context).age_bonus - 0.15).abs() < EPS);
    assert!((scorer.score(&ten_off, &context).age_bonus - 0.13).abs() < EPS);
    assert_eq!(scorer.score(&far, &context).age_bonus, 0.0, "bonus never goes negative");
}

#[test]
fn missing_age_target_follows_fallback() {
    let context = make_context();
    let candidate = make_candidate("untargeted", &[]);

    let matching = CareScorer::new(AgeTargetFallback::MatchContext);
    let neutral = CareScorer::new(AgeTargetFallback::NoBonus);

    assert!((matching.score(&candidate, &context).age_bonus - 0.15).abs() < EPS);
    assert_eq!(neutral.score(&candidate, &context).age_bonus, 0.0);

    // An explicit target is honored by both.
    let targeted = candidate.with_age_target(40);
    assert_eq!(
        matching.score(&targeted, &context).age_bonus,
        neutral.score(&targeted, &context).age_bonus
    );
}

#[test]
fn confidence_rounds_the_exact_value() {
    // Both literals are stored just below the halfway point.
    assert_eq!(round_confidence(0.0045), 0.004);
    assert_eq!(round_confidence(0.0115), 0.011);

    assert_eq!(round_confidence(0.9088347954), 0.909);
    assert_eq!(round_confidence(0.15), 0.15);
    assert_eq!(round_confidence(1.0), 1.0);
    assert_eq!(round_confidence(0.0), 0.0);
}
