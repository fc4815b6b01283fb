use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{Control, KeyScope};

/// Selector used to find slides when none is configured.
pub const DEFAULT_SLIDE_SELECTOR: &str = "figure";

/// Default delay between automatic advances.
pub const DEFAULT_AUTOPLAY_SPEED_MS: u64 = 1500;

/// Autoplay configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AutoplayOptions {
    /// Milliseconds between automatic advances.
    pub speed_ms: u64,
    /// Suspend the timer while the pointer is over the container.
    pub pause_on_hover: bool,
}

impl AutoplayOptions {
    pub fn new(speed_ms: u64) -> Self {
        Self {
            speed_ms,
            pause_on_hover: false,
        }
    }

    pub fn with_pause_on_hover(mut self, pause_on_hover: bool) -> Self {
        self.pause_on_hover = pause_on_hover;
        self
    }

    /// The effective period; a zero speed is clamped to 1 ms.
    pub fn period_ms(&self) -> u64 {
        self.speed_ms.max(1)
    }
}

impl Default for AutoplayOptions {
    fn default() -> Self {
        Self::new(DEFAULT_AUTOPLAY_SPEED_MS)
    }
}

/// Configuration for [`crate::Slideshow`].
///
/// All fields are resolved once at construction. With `feature = "serde"`, missing fields
/// fall back to their defaults when deserializing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SlideshowOptions {
    /// Which elements of the container constitute slides.
    pub slide_selector: String,
    /// `None` disables autoplay.
    pub autoplay: Option<AutoplayOptions>,
    /// Inject a fullscreen toggle control.
    pub fullscreen: bool,
    /// Register swipe gestures on the container.
    pub swipe: bool,
    pub key_scope: KeyScope,
}

impl Default for SlideshowOptions {
    fn default() -> Self {
        Self {
            slide_selector: DEFAULT_SLIDE_SELECTOR.to_string(),
            autoplay: None,
            fullscreen: false,
            swipe: false,
            key_scope: KeyScope::Container,
        }
    }
}

impl SlideshowOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slide_selector(mut self, selector: impl Into<String>) -> Self {
        self.slide_selector = selector.into();
        self
    }

    pub fn with_autoplay(mut self, autoplay: Option<AutoplayOptions>) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Enables autoplay with the given speed, keeping the default hover behavior.
    pub fn with_autoplay_speed(mut self, speed_ms: u64) -> Self {
        let mut autoplay = self.autoplay.unwrap_or_default();
        autoplay.speed_ms = speed_ms;
        self.autoplay = Some(autoplay);
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    pub fn with_swipe(mut self, swipe: bool) -> Self {
        self.swipe = swipe;
        self
    }

    pub fn with_key_scope(mut self, key_scope: KeyScope) -> Self {
        self.key_scope = key_scope;
        self
    }

    /// Shorthand for `with_key_scope(KeyScope::Document)` when `any_key_press` is set.
    pub fn with_any_key_press(self, any_key_press: bool) -> Self {
        let scope = if any_key_press {
            KeyScope::Document
        } else {
            KeyScope::Container
        };
        self.with_key_scope(scope)
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay.is_some()
    }

    pub fn pause_on_hover(&self) -> bool {
        self.autoplay.is_some_and(|a| a.pause_on_hover)
    }

    /// Controls injected into the container, in append order.
    pub fn controls(&self) -> Vec<Control> {
        let mut out = Vec::with_capacity(4);
        out.push(Control::Previous);
        out.push(Control::Next);
        out.push(Control::Position);
        if self.fullscreen {
            out.push(Control::Fullscreen);
        }
        out
    }
}
