/// Class name a host uses to mark a slide as visible.
pub const VISIBLE_CLASS: &str = "bss-show";

/// Direction of a single navigation step.
///
/// Every input source (controls, keyboard, swipe, autoplay) reduces to one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Maps a signed step to a direction: positive steps go forward, everything else goes back.
    pub fn from_step(step: i32) -> Self {
        if step > 0 {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    pub fn step(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// Returns the index one step away from `index`, wrapping around both ends.
    ///
    /// `count` must be non-zero.
    pub fn apply(self, index: usize, count: usize) -> usize {
        debug_assert!(count > 0, "Direction::apply: empty slide collection");
        match self {
            Self::Forward => {
                if index + 1 >= count {
                    0
                } else {
                    index + 1
                }
            }
            Self::Backward => {
                if index == 0 {
                    count.saturating_sub(1)
                } else {
                    index - 1
                }
            }
        }
    }
}

/// A keyboard key as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other(u32),
}

impl Key {
    pub const LEFT_CODE: u32 = 37;
    pub const RIGHT_CODE: u32 = 39;

    /// Maps a legacy DOM `keyCode`.
    pub fn from_code(code: u32) -> Self {
        match code {
            Self::LEFT_CODE => Self::ArrowLeft,
            Self::RIGHT_CODE => Self::ArrowRight,
            other => Self::Other(other),
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::ArrowLeft => Some(Direction::Backward),
            Self::ArrowRight => Some(Direction::Forward),
            Self::Other(_) => None,
        }
    }
}

/// A horizontal swipe gesture recognized on the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Swipe {
    Left,
    Right,
}

impl Swipe {
    /// Swiping left reveals the next slide; swiping right reveals the previous one.
    pub fn direction(self) -> Direction {
        match self {
            Self::Left => Direction::Forward,
            Self::Right => Direction::Backward,
        }
    }
}

/// Where keyboard input is listened for.
///
/// `Container` keeps instances on the same page independent. `Document` makes the instance
/// respond to any key press on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyScope {
    #[default]
    Container,
    Document,
}

/// A navigation control injected into the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Control {
    Previous,
    Next,
    Position,
    Fullscreen,
}

impl Control {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Previous => "bss-prev",
            Self::Next => "bss-next",
            Self::Position => "bss-pos",
            Self::Fullscreen => "bss-fullscreen",
        }
    }

    /// Static text content of the control. The position control is filled from
    /// [`crate::PositionLabel`] instead.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::Previous => Some("\u{ab}"),
            Self::Next => Some("\u{bb}"),
            Self::Position | Self::Fullscreen => None,
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Previous => Some(Direction::Backward),
            Self::Next => Some(Direction::Forward),
            Self::Position | Self::Fullscreen => None,
        }
    }
}

/// A host event routed to a slideshow instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    Click(Control),
    /// A key press, tagged with the scope of the listener that observed it.
    Key {
        key: Key,
        origin: KeyScope,
    },
    Swipe(Swipe),
    PointerEnter,
    PointerLeave,
}

/// What a dispatched [`Input`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Navigated { index: usize },
    Paused,
    Resumed,
    /// The fullscreen control was clicked; the host performs the actual toggle.
    ToggleFullscreen,
    Ignored,
}

impl Outcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}
