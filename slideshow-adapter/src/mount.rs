use slideshow::{
    Control, DeepLink, Input, KeyScope, Outcome, Slideshow, SlideshowError, SlideshowOptions,
};

use crate::{FullscreenToggle, Listener, Stage, toggle_fullscreen};

/// A slideshow bound to its container.
///
/// This type wraps a [`Slideshow`] and the [`Stage`] it renders to, and keeps the stage's
/// visibility markers and position text in sync after every transition. Adapters drive it by
/// calling:
/// - `dispatch(input, now_ms)` when an attached listener fires
/// - `tick(now_ms)` each frame/timer tick (for autoplay)
#[derive(Debug)]
pub struct Mounted<S> {
    slideshow: Slideshow,
    stage: S,
}

impl<S: Stage> Mounted<S> {
    /// Builds a slideshow on `stage`:
    ///
    /// 1. resolves the slides once, through `options.slide_selector`
    /// 2. marks slide 0 visible
    /// 3. appends the controls (previous, next, position, optional fullscreen)
    /// 4. attaches click, keyboard and (optional) swipe listeners
    /// 5. starts autoplay, if configured
    /// 6. applies the deep link from `fragment`
    ///
    /// In [`KeyScope::Document`] mode no key listener is attached to the container; route
    /// document-level keys through [`crate::KeyBroadcast`] (see [`crate::Presentation`]).
    pub fn mount(
        mut stage: S,
        options: SlideshowOptions,
        fragment: Option<&str>,
        now_ms: u64,
    ) -> Result<Self, SlideshowError> {
        let count = stage.resolve_slides(&options.slide_selector);
        let slideshow = Slideshow::new(count, options)?;
        let mut m = Self { slideshow, stage };

        for i in 0..count {
            m.stage.set_slide_visible(i, i == 0);
        }

        let controls = m.slideshow.options().controls();
        m.stage.append_controls(&controls);
        m.stage.set_position(&m.slideshow.position_label());

        for control in controls {
            if control != Control::Position {
                m.stage.listen(Listener::Click(control));
            }
        }
        if m.slideshow.options().key_scope == KeyScope::Container {
            m.stage.listen(Listener::KeyDown);
        }
        if m.slideshow.options().swipe {
            m.stage.listen(Listener::Swipe);
        }

        if m.slideshow.start_autoplay(now_ms) && m.slideshow.options().pause_on_hover() {
            m.stage.listen(Listener::Hover);
        }

        let link = DeepLink::from_fragment(fragment);
        if m.slideshow.apply_deep_link(&link) {
            m.sync();
        }

        sdebug!(
            count,
            ?link,
            index = m.slideshow.current_index(),
            "Mounted::mount"
        );
        Ok(m)
    }

    pub fn slideshow(&self) -> &Slideshow {
        &self.slideshow
    }

    pub fn stage(&self) -> &S {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    pub fn into_parts(self) -> (Slideshow, S) {
        (self.slideshow, self.stage)
    }

    pub fn key_scope(&self) -> KeyScope {
        self.slideshow.options().key_scope
    }

    /// Feeds a host event to the slideshow and updates the stage.
    pub fn dispatch(&mut self, input: Input, now_ms: u64) -> Outcome {
        let outcome = self.slideshow.handle(input, now_ms);
        match outcome {
            Outcome::Navigated { .. } => self.sync(),
            Outcome::ToggleFullscreen => {
                self.toggle_fullscreen();
            }
            Outcome::Paused | Outcome::Resumed | Outcome::Ignored => {}
        }
        outcome
    }

    /// Advances autoplay and updates the stage if the slide changed.
    pub fn tick(&mut self, now_ms: u64) -> u64 {
        let fired = self.slideshow.tick(now_ms);
        if fired > 0 {
            self.sync();
        }
        fired
    }

    /// Moves to slide `index` (0-based) and updates the stage.
    ///
    /// Unlike [`Slideshow::show_slide`], an out-of-range index is rejected with `false`.
    pub fn show_slide(&mut self, index: usize) -> bool {
        if index >= self.slideshow.count() {
            return false;
        }
        self.slideshow.show_slide(index);
        self.sync();
        true
    }

    pub fn toggle_fullscreen(&mut self) -> FullscreenToggle {
        let result = toggle_fullscreen(&mut self.stage);
        strace!(?result, "Mounted::toggle_fullscreen");
        result
    }

    fn sync(&mut self) {
        let s = &self.slideshow;
        for i in 0..s.count() {
            self.stage.set_slide_visible(i, s.is_visible(i));
        }
        self.stage.set_position(&s.position_label());
    }
}
