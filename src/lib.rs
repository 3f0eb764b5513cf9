//! Typo-tolerant search over a workout exercise and equipment catalog.
//!
//! The core is [`search::SearchIndex`], a build-once inverted index answering
//! multi-word AND queries with exact-or-prefix token matching. Around it sit the
//! catalog loader, configuration, and an MCP server exposing search as tools.

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod server;
pub mod state;
pub mod tools;
pub mod tracing;

pub use catalog::{Catalog, CatalogData, Equipment, Exercise};
pub use config::Config;
pub use search::{SearchHits, SearchIndex, Searchable};
pub use server::CatalogServer;
pub use state::CatalogState;
