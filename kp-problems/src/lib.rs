//! Problem model shared by the knapsack solvers: items, instances,
//! resource limits, result records and the error kinds raised when an
//! instance is malformed.

mod error;
pub use error::*;
mod instance;
pub use instance::*;
mod limits;
pub use limits::*;
mod solution;
pub use solution::*;
