mod client;
mod error;
mod fund;
mod operation;
mod subscription;
mod transaction;

pub use client::*;
pub use error::*;
pub use fund::*;
pub use operation::*;
pub use subscription::*;
pub use transaction::*;
