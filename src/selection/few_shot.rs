use crate::candidate::CandidatePool;
use crate::selection::ranking::Scorer;
use crate::types::{Context, ScoredCandidate};

use super::sort_by_score_desc;

/// Single-pass retrieval baseline: score everything once, keep the best `k`.
pub struct FewShotSelector<'s, S> {
    scorer: &'s S,
}

impl<'s, S: Scorer> FewShotSelector<'s, S> {
    pub fn new(scorer: &'s S) -> Self {
        Self { scorer }
    }

    pub fn select<'a>(
        &self,
        pool: &'a CandidatePool,
        context: &Context,
        k: usize,
    ) -> Vec<ScoredCandidate<'a>> {
        let mut scored: Vec<ScoredCandidate<'a>> = pool
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

        sort_by_score_desc(&mut scored);
        scored.truncate(k);
        scored
    }
}
