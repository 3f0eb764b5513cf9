pub mod catalog_stats;
pub mod get_exercise;
pub mod reload_catalog;
pub mod search;

pub use catalog_stats::*;
pub use get_exercise::*;
pub use reload_catalog::*;
pub use search::*;
