//! Adapter utilities for the `slideshow` crate.
//!
//! The `slideshow` crate is UI-agnostic and owns only navigation state. This crate provides
//! the framework-neutral pieces a host page needs around it:
//!
//! - A capability interface for containers ([`Stage`], [`FullscreenHost`]) and pages ([`Page`])
//! - The mount procedure that injects controls, attaches listeners, starts autoplay and applies
//!   the deep link ([`Mounted`])
//! - A best-effort fullscreen toggle over vendor API flavors ([`toggle_fullscreen`])
//! - A shared page-level key service for "respond to any key" instances ([`KeyBroadcast`])
//!
//! This crate is intentionally framework-agnostic (no web-sys/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod broadcast;
mod fullscreen;
mod mount;
mod page;
mod stage;


pub use broadcast::{KeyBroadcast, SubscriberId};
pub use fullscreen::{
    FULLSCREEN_FALLBACK_ORDER, FullscreenApi, FullscreenHost, FullscreenToggle, toggle_fullscreen,
};
pub use mount::Mounted;
pub use page::{Page, Presentation};
pub use stage::{Listener, Stage};
