use alloc::format;
use alloc::string::String;

/// Fragment token that shows every slide at once.
pub const SHOW_ALL_FRAGMENT: &str = "no-slides";

/// Prefix of a per-slide fragment (`slide3` selects the third slide).
pub const SLIDE_FRAGMENT_PREFIX: &str = "slide";

/// The initial state encoded in the page's address fragment.
///
/// The fragment is read once when an instance is created; later changes are not observed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeepLink {
    /// `#no-slides`: every slide is visible simultaneously.
    ShowAll,
    /// `#slide{k}`, 1-based. Not yet checked against the slide count.
    Slide(usize),
    /// Absent or unrecognized fragment.
    #[default]
    Unrecognized,
}

impl DeepLink {
    /// Parses a fragment, with or without the leading `#`.
    ///
    /// Never fails: anything that is not `no-slides` or `slide` followed by ASCII digits
    /// yields [`DeepLink::Unrecognized`].
    pub fn parse(fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        if fragment == SHOW_ALL_FRAGMENT {
            return Self::ShowAll;
        }
        let Some(digits) = fragment.strip_prefix(SLIDE_FRAGMENT_PREFIX) else {
            return Self::Unrecognized;
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Self::Unrecognized;
        }
        match digits.parse::<usize>() {
            Ok(k) => Self::Slide(k),
            Err(_) => Self::Unrecognized,
        }
    }

    /// Parses an optional fragment; `None` yields [`DeepLink::Unrecognized`].
    pub fn from_fragment(fragment: Option<&str>) -> Self {
        fragment.map(Self::parse).unwrap_or_default()
    }

    /// Returns the 0-based slide index this link selects, if it is in range for `count` slides.
    pub fn resolve(&self, count: usize) -> Option<usize> {
        match *self {
            Self::Slide(k) if k >= 1 && k <= count => Some(k - 1),
            _ => None,
        }
    }
}

/// Fragment (without `#`) that links to the slide at 0-based `index`.
pub fn slide_fragment(index: usize) -> String {
    format!("{SLIDE_FRAGMENT_PREFIX}{}", index.saturating_add(1))
}
