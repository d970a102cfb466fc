//! A headless virtual-repeat reconciler.
//!
//! For a reference host and an adapter-level controller, see the `virtual-repeat-adapter` crate.
//!
//! A virtual repeat renders only a window of rows out of a large sequence and stands in for the
//! rest with two buffers (top and bottom) sized in whole rows. This crate keeps that window
//! correct while the sequence is replaced wholesale or spliced, recycling views instead of
//! rebuilding them:
//! - index classification: which data indexes are rendered, and in which slot
//! - splice reconciliation, including asynchronous view disposal and batch coalescing
//! - per-view metadata (`$index`, `$first`, `$middle`, `$last`, `$even`, `$odd`)
//!
//! It is UI-agnostic. A UI layer implements [`ViewHost`] to provide:
//! - view creation, recycling, moving and rebinding
//! - the measured row height and the distance to the viewport's bottom edge
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod host;
mod options;
mod reconciler;
mod splice;
mod state;
mod types;
mod window;


pub use error::Error;
pub use host::ViewHost;
pub use options::RepeatOptions;
pub use reconciler::Reconciler;
pub use splice::{Splice, merge_splice, validate_batch};
pub use state::WindowState;
pub use types::{BatchStatus, Placement, Removal, RemovalId, ViewContext};
pub use window::Window;
