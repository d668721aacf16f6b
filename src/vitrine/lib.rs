//! # Vitrine Architecture
//!
//! Vitrine is a **UI-agnostic storefront browsing library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client. The same core could back a web frontend, a
//! TUI, or a kiosk display.
//!
//! ## The Layered Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Browse Facade (api.rs)                                     │
//! │  - Owns the catalog snapshot and the view state             │
//! │  - setFilter / setSort / loadMore entry points              │
//! │  - Exposes visible products, match count, paging flags      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (engine/*.rs)                                       │
//! │  - Pure functions: filter, sort, page window, shuffle       │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Source Layer (source/)                                     │
//! │  - Abstract CatalogSource trait                             │
//! │  - HttpCatalog (production), InMemoryCatalog (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Browsing Pipeline
//!
//! Every user interaction reduces to one data flow:
//!
//! ```text
//! catalog → filter (selection) → sort (key) → page window → visible slice
//! ```
//!
//! The catalog is fetched whole—the backend exposes no pagination—so
//! filtering and sorting are synchronous, pure computations over in-memory
//! data. The page window then exposes a growing prefix of the result,
//! advancing one fixed-size increment per proximity signal. Changing the
//! filter, the sort, or the catalog restarts the window at the first page.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (facade, engine, sources), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! ## Testing Strategy
//!
//! 1. **Engine** (`engine/*.rs`): thorough unit tests of the pure logic.
//!    This is where the lion's share of testing lives.
//! 2. **Facade** (`api.rs`): async tests over `InMemoryCatalog` verifying the
//!    recompute pipeline and the paging gate, with a zero load delay.
//! 3. **CLI** (`main.rs` + friends): binary-level smoke tests with
//!    `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The browse facade—entry point for all operations
//! - [`engine`]: Filtering, sorting, page window, random sampling
//! - [`source`]: Catalog source abstraction and implementations
//! - [`model`]: Wire types (`Product`, `Category`, `Brand`)
//! - [`selection`]: Filter selection state and price bands
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `main.rs`/`args.rs`/`print.rs`: the CLI client (not part of the lib API)

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod selection;
pub mod source;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
