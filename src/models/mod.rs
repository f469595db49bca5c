pub mod kpi;
pub mod municipality;

pub use kpi::*;
pub use municipality::*;
