use std::collections::BTreeSet;

use crate::candidate::Candidate;
use crate::types::identifiers::{CandidateId, PoolVersion};

/// Read-only candidate sequence handed to the engine.
///
/// Order matters: it is the tie-break order for equal scores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
}

impl CandidatePool {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn distinct_ids(&self) -> usize {
        self.candidates
            .iter()
            .map(|c| &c.id)
            .collect::<BTreeSet<&CandidateId>>()
            .len()
    }

    /// First id that appears more than once, in pool order.
    pub fn first_duplicate(&self) -> Option<&CandidateId> {
        let mut seen = BTreeSet::new();
        self.candidates
            .iter()
            .map(|c| &c.id)
            .find(|id| !seen.insert(*id))
    }

    /// Content hash over every candidate, independent of pool order.
    ///
    /// Lines are `id:` followed by the candidate's compact JSON, sorted by id
    /// then by line, so two pools holding the same records hash equal.
    pub fn version(&self) -> Result<PoolVersion, serde_json::Error> {
        let mut lines = self
            .candidates
            .iter()
            .map(|c| Ok((&c.id, canonical_line(c)?)))
            .collect::<Result<Vec<(&CandidateId, Vec<u8>)>, serde_json::Error>>()?;
        lines.sort();

        Ok(PoolVersion::from_lines(lines.iter().map(|(_, line)| line.as_slice())))
    }
}

impl From<Vec<Candidate>> for CandidatePool {
    fn from(candidates: Vec<Candidate>) -> Self {
        Self::new(candidates)
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

fn canonical_line(candidate: &Candidate) -> Result<Vec<u8>, serde_json::Error> {
    let mut line = format!("{}:", candidate.id.as_str()).into_bytes();
    serde_json::to_writer(&mut line, candidate)?;
    Ok(line)
}
