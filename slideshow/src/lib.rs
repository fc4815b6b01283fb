//! A headless, embeddable slideshow controller.
//!
//! This crate turns a fixed sequence of slides into a navigable, optionally autoplaying
//! carousel: circular navigation, keyboard/swipe/control input mapping, pause-on-hover
//! autoplay, and deep links through the page's address fragment (`#slide3`, `#no-slides`).
//!
//! It is UI-agnostic. A host layer (see the `slideshow-adapter` crate) is expected to:
//! - count the slides of a container once, at construction
//! - render the visibility markers and the position label
//! - translate clicks, key presses, swipes and hover into [`Input`]s
//! - drive autoplay by calling [`Slideshow::tick`] with its own clock
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod deep_link;
mod error;
mod label;
mod options;
mod slideshow;
mod state;
mod types;

#[cfg(test)]
mod tests;

#[doc(hidden)]
#[cfg(feature = "tracing")]
pub mod __private {
    pub use tracing;
}

pub use autoplay::{Autoplay, Interval, PlaybackState};
pub use deep_link::{DeepLink, SHOW_ALL_FRAGMENT, SLIDE_FRAGMENT_PREFIX, slide_fragment};
pub use error::SlideshowError;
pub use label::PositionLabel;
pub use options::{
    AutoplayOptions, DEFAULT_AUTOPLAY_SPEED_MS, DEFAULT_SLIDE_SELECTOR, SlideshowOptions,
};
pub use slideshow::{OnChangeCallback, Slideshow};
pub use state::SlideshowState;
pub use types::{Control, Direction, Input, Key, KeyScope, Outcome, Swipe, VISIBLE_CLASS};
