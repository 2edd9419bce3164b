//! Iterative re-ranking with a decaying, deterministic exploration term.
//!
//! Every round re-scores the *whole* pool; nothing but the temperature
//! carries over between rounds. As the temperature decays the ranking
//! converges on the scorer's base order. There is no sampling anywhere:
//! the "prior" is `amplitude * sin(frequency * distinct_tags)`.

use crate::candidate::{Candidate, CandidatePool};
use crate::config::OptimizerConfig;
use crate::selection::ranking::{clamp_unit, Scorer};
use crate::types::{Context, ScoredCandidate, SelectionError};

use super::sort_by_score_desc;

pub struct IterativeOptimizer<'s, S> {
    scorer: &'s S,
    config: OptimizerConfig,
}

impl<'s, S: Scorer> IterativeOptimizer<'s, S> {
    pub fn new(scorer: &'s S, config: OptimizerConfig) -> Self {
        Self { scorer, config }
    }

    /// Run `iterations` rounds and return the final round's best set.
    ///
    /// Zero rounds would leave nothing to return, so it is rejected.
    pub fn optimize<'a>(
        &self,
        pool: &'a CandidatePool,
        context: &Context,
        iterations: usize,
    ) -> Result<Vec<ScoredCandidate<'a>>, SelectionError> {
        if iterations == 0 {
            return Err(SelectionError::InvalidIterations(iterations));
        }

        // Base scores do not depend on temperature; compute them once.
        let base: Vec<ScoredCandidate<'a>> = pool
            .iter()
            .map(|candidate| {
                let details = self.scorer.score(candidate, context);
                let score = self.scorer.score_value(&details);
                ScoredCandidate {
                    candidate,
                    score,
                    details,
                    exploration_bonus: 0.0,
                }
            })
            .collect();

        let mut temperature = self.config.initial_temperature;
        let mut best = Vec::new();

        for round in 0..iterations {
            let mut scored: Vec<ScoredCandidate<'a>> = base
                .iter()
                .map(|sc| {
                    let bonus = temperature * self.prior(sc.candidate);
                    ScoredCandidate {
                        score: clamp_unit(sc.score + bonus),
                        exploration_bonus: bonus,
                        ..sc.clone()
                    }
                })
                .collect();

            sort_by_score_desc(&mut scored);
            scored.truncate(self.config.keep);

            tracing::trace!(
                round,
                temperature,
                survivors = scored.len(),
                "optimizer round complete"
            );

            best = scored;
            temperature *= self.config.decay;
        }

        Ok(best)
    }

    fn prior(&self, candidate: &Candidate) -> f64 {
        let diversity = candidate.diversity() as f64;
        self.config.prior_amplitude * (self.config.prior_frequency * diversity).sin()
    }
}
