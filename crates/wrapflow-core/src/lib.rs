//! Single-threaded runtime helpers for wrapflow
//!
//! Layout state lives on the UI thread. This crate provides the shared
//! ownership cell used by layout handles and the observer registry that
//! replaces a host framework's "state changed, re-render" plumbing.

mod observer;
mod owned;

pub use observer::{ObserverHandle, ObserverRegistry};
pub use owned::{Owned, WeakOwned};
