//! Version resolution engine: semantic version constraints, range reduction,
//! greedy newest-first dependency search, and the resolved dependency graph.

pub mod conflict;
pub mod error;
pub mod graph;
pub mod index;
pub mod range;
pub mod reducer;
pub mod resolver;
pub mod version;
