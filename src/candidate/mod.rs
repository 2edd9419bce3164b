pub mod candidate;
pub mod pool;

pub use crate::types::identifiers::{CandidateId, PoolVersion};
pub use candidate::Candidate;
pub use pool::CandidatePool;
