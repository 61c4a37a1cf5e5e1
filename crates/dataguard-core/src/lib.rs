pub mod cell;
pub mod column;
pub mod constraint;
pub mod csv;
pub mod dataset;
pub mod errors;
pub mod kernels;
pub mod schema;
pub mod utils;
pub mod validator;

pub use cell::Cell;
pub use column::Column;
pub use constraint::{Constraint, Rule};
pub use dataset::Dataset;
pub use errors::RuleError;
pub use schema::{DataType, Schema};
pub use validator::{validate, RuleOutcome};
