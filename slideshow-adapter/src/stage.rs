use slideshow::{Control, PositionLabel};

use crate::FullscreenHost;

/// An event listener the host is asked to attach to the container.
///
/// Once attached, the host translates the events into [`slideshow::Input`]s and passes them
/// to [`crate::Mounted::dispatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Listener {
    /// Clicks on an injected control.
    Click(Control),
    /// Key presses inside the container.
    KeyDown,
    /// Left/right swipe gestures on the container.
    Swipe,
    /// Pointer entering and leaving the container.
    Hover,
}

/// The capability interface of one slideshow container.
///
/// This is all the core needs from a rendering surface: marking slides visible or hidden,
/// injecting controls, updating the position text, and registering listeners. Fullscreen
/// support comes from the [`FullscreenHost`] supertrait, whose defaults are inert.
pub trait Stage: FullscreenHost {
    /// Resolves the slides inside this container and returns how many there are.
    ///
    /// Called once; later changes to the container are not observed.
    fn resolve_slides(&mut self, selector: &str) -> usize;

    /// Adds or removes the visibility marker of slide `index`.
    fn set_slide_visible(&mut self, index: usize, visible: bool);

    /// Appends controls to the container, in the given order.
    fn append_controls(&mut self, controls: &[Control]);

    /// Updates the text and link target of the position control.
    fn set_position(&mut self, label: &PositionLabel);

    fn listen(&mut self, listener: Listener);
}
