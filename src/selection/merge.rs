use std::collections::BTreeMap;

use crate::candidate::Candidate;
use crate::types::{CandidateId, ScoredCandidate};

use super::sort_by_score_desc;

pub struct MergeResult<'a> {
    pub ranked: Vec<ScoredCandidate<'a>>,
    pub distinct_candidates: usize,
    pub duplicates_collapsed: usize,
}

/// Union two rankings keyed by candidate id.
///
/// `first` is folded in before `second`, so on collision the entry from
/// `second` wins. The surviving entry keeps the position where the id was
/// first seen, which is what breaks ties in the final stable sort.
pub fn merge_rankings<'a>(
    first: Vec<ScoredCandidate<'a>>,
    second: Vec<ScoredCandidate<'a>>,
    k: usize,
) -> MergeResult<'a> {
    let mut slots: Vec<ScoredCandidate<'a>> = Vec::with_capacity(first.len() + second.len());
    let mut positions: BTreeMap<&'a CandidateId, usize> = BTreeMap::new();
    let mut duplicates_collapsed = 0;

    for entry in first.into_iter().chain(second) {
        let candidate: &'a Candidate = entry.candidate;
        let id = &candidate.id;
        match positions.get(id) {
            Some(&slot) => {
                slots[slot] = entry;
                duplicates_collapsed += 1;
            }
            None => {
                positions.insert(id, slots.len());
                slots.push(entry);
            }
        }
    }

    let distinct_candidates = slots.len();
    sort_by_score_desc(&mut slots);
    slots.truncate(k);

    MergeResult {
        ranked: slots,
        distinct_candidates,
        duplicates_collapsed,
    }
}
