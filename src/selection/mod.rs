pub mod few_shot;
pub mod merge;
pub mod optimizer;
pub mod ranking;

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::time::Instant;

use crate::candidate::CandidatePool;
use crate::config::{ConfigError, EngineConfig};
use crate::types::{
	Context, RecommendationMetadata, RecommendationResult, RecommendedItem, ScoredCandidate,
	SelectionError, STRATEGY_LABEL,
};
pub use few_shot::FewShotSelector;
pub use merge::{merge_rankings, MergeResult};
pub use optimizer::IterativeOptimizer;
pub use ranking::{CareScorer, Scorer};

pub struct RecommendationEngine<S> {
	scorer: S,
	config: EngineConfig,
}

impl Default for RecommendationEngine<CareScorer> {
	fn default() -> Self {
		let config = EngineConfig::v0();
		Self {
			scorer: CareScorer::new(config.age_target_fallback),
			config,
		}
	}
}

impl RecommendationEngine<CareScorer> {
	/// Build the stock scorer from a configuration.
	pub fn from_config(config: EngineConfig) -> Result<Self, ConfigError> {
		let scorer = CareScorer::new(config.age_target_fallback);
		Self::new(scorer, config)
	}
}

impl<S> RecommendationEngine<S>
where
	S: Scorer,
{
	pub fn new(scorer: S, config: EngineConfig) -> Result<Self, ConfigError> {
		if let Err(err) = config.validate() {
			tracing::warn!(error = %err, "rejecting engine configuration");
			return Err(err);
		}
		Ok(Self { scorer, config })
	}

	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	pub fn scorer(&self) -> &S {
		&self.scorer
	}

	pub fn few_shot(&self) -> FewShotSelector<'_, S> {
		FewShotSelector::new(&self.scorer)
	}

	pub fn optimizer(&self) -> IterativeOptimizer<'_, S> {
		IterativeOptimizer::new(&self.scorer, self.config.optimizer.clone())
	}

	pub fn recommend(
		&self,
		context: &Context,
		pool: &CandidatePool,
	) -> Result<RecommendationResult, SelectionError> {
		let start = Instant::now();

		// 1. Retrieval baseline
		let few_shot = self.few_shot().select(pool, context, self.config.few_shot_k);

		// 2. Exploration / exploitation re-ranking
		let optimized = self
			.optimizer()
			.optimize(pool, context, self.config.iterations)?;

		let few_shot_count = few_shot.len();
		let optimized_count = optimized.len();

		tracing::debug!(
			user_id = %context.user_id,
			pool = pool.len(),
			few_shot_count,
			optimized_count,
			"candidate strategies complete"
		);

		// 3. Merge Phase
		let MergeResult {
			ranked,
			distinct_candidates,
			duplicates_collapsed,
		} = merge_rankings(few_shot, optimized, self.config.result_k);

		debug_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
		debug_assert_eq!(
			ranked.iter().map(|sc| &sc.candidate.id).collect::<BTreeSet<_>>().len(),
			ranked.len()
		);

		let pool_version = pool.version()?;
		let items: Vec<RecommendedItem> = ranked.iter().map(ScoredCandidate::to_item).collect();
		let runtime_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

		tracing::debug!(
			user_id = %context.user_id,
			distinct_candidates,
			duplicates_collapsed,
			returned = items.len(),
			runtime_ms,
			"recommendation ranked"
		);

		Ok(RecommendationResult {
			user_id: context.user_id.clone(),
			items,
			strategy: STRATEGY_LABEL.to_string(),
			runtime_ms,
			meta: RecommendationMetadata {
				few_shot_count,
				optimized_count,
				candidates_considered: pool.len(),
				pool_version: pool_version.as_str().to_string(),
			},
		})
	}
}

/// Stable descending sort: equal scores keep their incoming order.
pub(crate) fn sort_by_score_desc(scored: &mut [ScoredCandidate<'_>]) {
	scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}
