//! Seams between the aggregator and a host search engine.

pub mod in_memory;
pub mod match_context;
pub mod result_sink;

pub use in_memory::InMemoryMatchContext;
pub use match_context::MatchContext;
pub use result_sink::{CapturedResult, ResultSink};
