// Matching engine
// Implements: skill vocabularies, text preprocessing, keyword/weighted scoring,
// greedy best-match assignment, job statistics, top-K ranking.
// Everything below `handlers` is synchronous and runs to completion in one call.

pub mod handlers;
pub mod matcher;
pub mod pipeline;
pub mod preprocess;
pub mod ranking;
pub mod stats;
pub mod strategy;
pub mod vocabulary;
