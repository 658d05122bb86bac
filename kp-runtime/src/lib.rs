mod interactive;
pub use interactive::*;
mod report;
pub use report::*;
