mod client;
mod fund;
mod notifier;
mod subscription;
mod transaction;

pub use client::*;
pub use fund::*;
pub use notifier::*;
pub use subscription::*;
pub use transaction::*;
