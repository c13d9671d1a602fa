pub mod error;
pub mod hypothesis;
pub mod types;
pub mod validation;

pub use error::*;
pub use hypothesis::*;
pub use types::*;
pub use validation::*;
