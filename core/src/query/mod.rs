//! Query engine
//!
//! Pure views over a task collection: filtering, ordering, and the
//! dashboard aggregates. Nothing here touches storage.

mod dashboard;
mod filter;

pub use dashboard::*;
pub use filter::*;
