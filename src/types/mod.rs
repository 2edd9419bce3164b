pub mod context;
pub mod identifiers;
pub mod recommendation;

pub use context::{Context, CulturalProfile};
pub use identifiers::{CandidateId, PoolVersion};
pub use recommendation::{
    round_confidence, RecommendationMetadata, RecommendationResult, RecommendationWhy,
    RecommendedItem, ScoreDetails, ScoredCandidate, SelectionError, CONFIDENCE_DECIMALS,
    STRATEGY_LABEL,
};
