use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::deep_link::slide_fragment;

/// Text and link target of the position control.
///
/// Displays as `"{index + 1} of {count}"` and links to `#slide{index + 1}`, so every reachable
/// state can be bookmarked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionLabel {
    /// 0-based index of the current slide.
    pub index: usize,
    pub count: usize,
}

impl PositionLabel {
    pub fn new(index: usize, count: usize) -> Self {
        Self { index, count }
    }

    /// The fragment without `#`.
    pub fn fragment(&self) -> String {
        slide_fragment(self.index)
    }

    pub fn href(&self) -> String {
        format!("#{}", self.fragment())
    }

    /// Markup for DOM hosts: the label wrapped in a link to its own fragment.
    pub fn to_html(&self) -> String {
        format!("<a href=\"{}\">{}</a>", self.href(), self)
    }
}

impl fmt::Display for PositionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.index.saturating_add(1), self.count)
    }
}
