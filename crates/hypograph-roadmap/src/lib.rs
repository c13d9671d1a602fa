pub mod progress;
pub mod state;
pub mod step;

pub use progress::*;
pub use state::*;
pub use step::*;
