//! The browsing engine: pure functions over in-memory catalog data.
//!
//! Nothing in this module performs I/O or holds state beyond its arguments.
//! The facade ([`crate::api`]) composes these pieces into the pipeline
//! `filter → sort → window` and re-runs it whenever the selection, the sort
//! key, or the catalog changes.

pub mod filter;
pub mod shuffle;
pub mod sort;
pub mod window;

pub use sort::SortKey;
pub use window::{LoadPhase, PageWindow};
