use alloc::sync::Arc;

use crate::autoplay::Autoplay;
use crate::{
    Control, DeepLink, Direction, Input, Outcome, PlaybackState, PositionLabel, SlideshowError,
    SlideshowOptions, SlideshowState,
};

/// A callback fired after every transition (slide change or show-all).
pub type OnChangeCallback = Arc<dyn Fn(&Slideshow) + Send + Sync>;

/// A headless slideshow controller.
///
/// This type is UI-agnostic:
/// - It does not hold any UI objects; a host reads [`Slideshow::is_visible`] and
///   [`Slideshow::position_label`] (or registers an `on_change` callback) to render.
/// - Host events are reduced to [`Input`]s and fed through [`Slideshow::handle`].
/// - Time is adapter-driven: autoplay advances when the host calls [`Slideshow::tick`].
///
/// Exactly one slide is visible at any time, except in show-all mode (entered through the
/// `#no-slides` deep link), where every slide is visible until the next transition.
#[derive(Clone)]
pub struct Slideshow {
    options: SlideshowOptions,
    count: usize,
    current: usize,
    show_all: bool,
    autoplay: Autoplay,
    on_change: Option<OnChangeCallback>,
}

impl Slideshow {
    /// Creates a slideshow over `count` slides with slide 0 visible.
    ///
    /// Autoplay is configured but not started; see [`Slideshow::start_autoplay`].
    pub fn new(count: usize, options: SlideshowOptions) -> Result<Self, SlideshowError> {
        if count == 0 {
            swarn!(selector = %options.slide_selector, "Slideshow::new: no slides");
            return Err(SlideshowError::NoSlides {
                selector: options.slide_selector.clone(),
            });
        }
        sdebug!(
            count,
            autoplay = options.autoplay_enabled(),
            fullscreen = options.fullscreen,
            swipe = options.swipe,
            "Slideshow::new"
        );
        Ok(Self {
            autoplay: Autoplay::new(options.autoplay),
            options,
            count,
            current: 0,
            show_all: false,
            on_change: None,
        })
    }

    pub fn options(&self) -> &SlideshowOptions {
        &self.options
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&Slideshow) + Send + Sync + 'static>,
    ) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    fn notify(&self) {
        if let Some(cb) = &self.on_change {
            cb(self);
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_show_all(&self) -> bool {
        self.show_all
    }

    pub fn is_visible(&self, index: usize) -> bool {
        index < self.count && (self.show_all || index == self.current)
    }

    pub fn visible_count(&self) -> usize {
        if self.show_all { self.count } else { 1 }
    }

    /// Calls `f` with every visible slide index, in ascending order.
    pub fn for_each_visible(&self, mut f: impl FnMut(usize)) {
        if self.show_all {
            for i in 0..self.count {
                f(i);
            }
        } else {
            f(self.current);
        }
    }

    /// The position control's current text and link target.
    pub fn position_label(&self) -> PositionLabel {
        PositionLabel::new(self.current, self.count)
    }

    /// Makes slide `index` the only visible slide.
    ///
    /// Callers must pass `index < count()`. An out-of-range index is debug-asserted and
    /// otherwise ignored.
    pub fn show_slide(&mut self, index: usize) {
        if index >= self.count {
            swarn!(index, count = self.count, "show_slide: out-of-range index");
            debug_assert!(
                index < self.count,
                "show_slide: out-of-range index (i={index}, count={})",
                self.count
            );
            return;
        }
        strace!(from = self.current, to = index, "show_slide");
        self.show_all = false;
        self.current = index;
        self.notify();
    }

    /// Moves one step in `direction`, wrapping around both ends, and shows the result.
    ///
    /// Returns the new current index.
    pub fn show_current(&mut self, direction: Direction) -> usize {
        let next = direction.apply(self.current, self.count);
        self.show_slide(next);
        self.current
    }

    pub fn next(&mut self) -> usize {
        self.show_current(Direction::Forward)
    }

    pub fn prev(&mut self) -> usize {
        self.show_current(Direction::Backward)
    }

    /// Marks every slide visible. The current index is left unchanged.
    pub fn show_all(&mut self) {
        strace!(count = self.count, "show_all");
        self.show_all = true;
        self.notify();
    }

    /// Applies an initial deep link.
    ///
    /// Returns `false` (and changes nothing) for [`DeepLink::Unrecognized`] and out-of-range
    /// slides.
    pub fn apply_deep_link(&mut self, link: &DeepLink) -> bool {
        if matches!(link, DeepLink::ShowAll) {
            self.show_all();
            return true;
        }
        match link.resolve(self.count) {
            Some(index) => {
                self.show_slide(index);
                true
            }
            None => {
                sdebug!(?link, count = self.count, "deep link ignored");
                false
            }
        }
    }

    /// Maps a host event to a transition.
    pub fn handle(&mut self, input: Input, now_ms: u64) -> Outcome {
        match input {
            Input::Click(control) => {
                if let Some(direction) = control.direction() {
                    return self.navigate(direction);
                }
                if control == Control::Fullscreen && self.options.fullscreen {
                    return Outcome::ToggleFullscreen;
                }
                Outcome::Ignored
            }
            Input::Key { key, origin } => {
                if origin != self.options.key_scope {
                    return Outcome::Ignored;
                }
                match key.direction() {
                    Some(direction) => self.navigate(direction),
                    None => Outcome::Ignored,
                }
            }
            Input::Swipe(swipe) => {
                if !self.options.swipe {
                    return Outcome::Ignored;
                }
                self.navigate(swipe.direction())
            }
            Input::PointerEnter => {
                if self.autoplay.pause_on_hover() && self.autoplay.pause() {
                    strace!(index = self.current, "autoplay paused");
                    Outcome::Paused
                } else {
                    Outcome::Ignored
                }
            }
            Input::PointerLeave => {
                if self.autoplay.pause_on_hover() && self.autoplay.resume(now_ms) {
                    strace!(index = self.current, now_ms, "autoplay resumed");
                    Outcome::Resumed
                } else {
                    Outcome::Ignored
                }
            }
        }
    }

    fn navigate(&mut self, direction: Direction) -> Outcome {
        let index = self.show_current(direction);
        Outcome::Navigated { index }
    }

    /// Starts the autoplay timer, if configured. Only the first call has an effect.
    pub fn start_autoplay(&mut self, now_ms: u64) -> bool {
        let started = self.autoplay.start(now_ms);
        if started {
            sdebug!(now_ms, options = ?self.autoplay.options(), "autoplay started");
        }
        started
    }

    /// Advances autoplay. Returns how many periods elapsed since the previous tick.
    ///
    /// Several elapsed periods are applied as a single transition landing where the same
    /// number of forward steps would have.
    pub fn tick(&mut self, now_ms: u64) -> u64 {
        let fired = self.autoplay.due(now_ms);
        if fired == 0 {
            return 0;
        }
        let steps = (fired % self.count as u64) as usize;
        let target = (self.current + steps) % self.count;
        strace!(now_ms, fired, target, "autoplay tick");
        self.show_slide(target);
        fired
    }

    pub fn playback(&self) -> PlaybackState {
        self.autoplay.state()
    }

    /// Number of live autoplay timers (0 or 1).
    pub fn active_timers(&self) -> usize {
        self.autoplay.active_timers()
    }

    /// Returns a lightweight snapshot of the navigation state.
    pub fn state(&self) -> SlideshowState {
        SlideshowState {
            current_index: self.current,
            count: self.count,
            show_all: self.show_all,
            playback: self.playback(),
        }
    }

    /// Restores a previously captured snapshot.
    ///
    /// An out-of-range `current_index` (e.g. captured from a larger slideshow) is ignored.
    /// Playback can only be restored when autoplay is configured. `on_change` fires once.
    pub fn restore_state(&mut self, state: SlideshowState, now_ms: u64) {
        if state.current_index < self.count {
            self.current = state.current_index;
        } else {
            swarn!(
                index = state.current_index,
                count = self.count,
                "restore_state: index out of range, ignored"
            );
        }
        self.show_all = state.show_all;
        match state.playback {
            PlaybackState::Off => {}
            PlaybackState::Running => {
                if !self.autoplay.start(now_ms) {
                    self.autoplay.resume(now_ms);
                }
            }
            PlaybackState::Paused => {
                self.autoplay.start(now_ms);
                self.autoplay.pause();
            }
        }
        strace!(index = self.current, show_all = self.show_all, "restore_state");
        self.notify();
    }
}

impl core::fmt::Debug for Slideshow {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Slideshow")
            .field("options", &self.options)
            .field("count", &self.count)
            .field("current", &self.current)
            .field("show_all", &self.show_all)
            .field("autoplay", &self.autoplay)
            .finish_non_exhaustive()
    }
}
