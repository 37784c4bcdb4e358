#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod bitrow;
pub mod store;

pub use bitrow::BitRow;
pub use store::{CornerView, Endpoint, InsertOutcome, ReachabilityStore, StoreError};

/// Returns the current version of the cyclegate-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
