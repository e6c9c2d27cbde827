//! In-memory query engine: filtering, ordering and pagination.
//!
//! - [`Criteria`] compiles optional predicates into [`Clause`]s
//! - [`sort`] orders records by a [`SortKey`]
//! - [`Page`] cuts one page out of a sequence
//!
//! All three are pure: they take a sequence and return a new one.

mod clause;
mod criteria;
mod op;
mod ordering;
mod page;
mod traits;
mod value;

pub use clause::{Clause, ClauseValue};
pub use criteria::Criteria;
pub use op::Op;
pub use ordering::{sort, SortKey};
pub use page::Page;
pub use traits::{Discriminant, Field, Fields};
pub use value::{Timestamp, Value};
