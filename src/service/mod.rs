mod boot;
pub mod mock;
pub mod orchestrator;
mod workflow;

pub use boot::*;
pub use orchestrator::*;
pub use workflow::*;
