pub mod builder;
pub mod link;
pub mod traversal;

pub use builder::*;
pub use link::*;
pub use traversal::*;
