use crate::PlaybackState;

/// A lightweight, serializable snapshot of a slideshow's navigation state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
/// Restoring it does not re-read the address fragment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideshowState {
    pub current_index: usize,
    pub count: usize,
    pub show_all: bool,
    pub playback: PlaybackState,
}
