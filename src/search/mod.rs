//! In-memory inverted index for typo-tolerant catalog search.
//!
//! Built once from a corpus and a text extractor, then queried with free text.
//! Every query word must match an item, either as an exact token or as the
//! prefix of one, so "dumb row" finds "Dumbbell Row".

// Module declarations
pub(crate) mod index;
pub(crate) mod query;
pub(crate) mod tokenize;

pub use index::{ItemId, SearchIndex, Searchable};
pub use query::SearchHits;
pub use tokenize::{MIN_TOKEN_LENGTH, tokenize, tokenize_unique};
