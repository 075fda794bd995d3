//! Step Validation
//!
//! Checks detected steps against a recording and computes the padded read
//! window needed to smooth the samples of each step.

mod error;
mod step;
mod validator;

pub use error::StepError;
pub use step::{ReadWindow, Step};
pub use validator::StepValidator;
