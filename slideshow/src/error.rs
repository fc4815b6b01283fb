use alloc::string::String;

/// Errors returned when building a slideshow.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SlideshowError {
    /// The slide selector matched nothing inside the container.
    #[error("slideshow has no slides (selector `{selector}` matched nothing)")]
    NoSlides { selector: String },
}
