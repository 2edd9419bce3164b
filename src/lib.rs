//! Deterministic care-content recommendation engine.
//!
//! `care-rank` scores a pool of candidate items against a requester's
//! context, ranks them twice (a single-pass few-shot selection and an
//! iterative re-ranking with a decaying exploration term), then merges,
//! de-duplicates and truncates the two rankings. There is no randomness:
//! identical inputs always produce identical rankings.

pub mod candidate;
pub mod catalog;
pub mod config;
pub mod selection;
pub mod types;
pub mod wire;
