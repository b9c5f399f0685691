//! Data model shared with the qgen backend.
//!
//! These types mirror the JSON bodies exchanged with the REST API. Tuples
//! keep their dimension order (the backend writes them in dimension
//! declaration order) so grids render columns consistently.

mod project;
mod query;
mod tuple;

pub use project::*;
pub use query::*;
pub use tuple::*;
