//! Adapter utilities for the `virtual-repeat` crate.
//!
//! The `virtual-repeat` crate is UI-agnostic and only decides which views to create, move,
//! rebind or remove. This crate provides the pieces an adapter needs around it:
//!
//! - [`SlotHost`]: an in-memory view host with a view cache and timed removal animations
//! - [`Controller`]: owns the sequence and turns data edits and scroll events into reconciler
//!   calls, finishing animations on `tick(now_ms)`
//!
//! This crate is intentionally framework-agnostic; a real UI binding implements
//! `virtual_repeat::ViewHost` over its own widgets instead of using [`SlotHost`].
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod host;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use host::{HostStats, RenderedView, SlotHost, ViewId};
