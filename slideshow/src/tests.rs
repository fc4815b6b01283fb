use crate::*;

use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

fn visible(s: &Slideshow) -> Vec<usize> {
    let mut out = Vec::new();
    s.for_each_visible(|i| out.push(i));
    out
}

fn autoplay_options(speed_ms: u64, pause_on_hover: bool) -> SlideshowOptions {
    SlideshowOptions::new()
        .with_autoplay(Some(AutoplayOptions::new(speed_ms).with_pause_on_hover(pause_on_hover)))
}

#[test]
fn options_defaults_match_documented_values() {
    let o = SlideshowOptions::default();
    assert_eq!(o.slide_selector, "figure");
    assert_eq!(o.autoplay, None);
    assert!(!o.fullscreen);
    assert!(!o.swipe);
    assert_eq!(o.key_scope, KeyScope::Container);
    assert_eq!(AutoplayOptions::default().speed_ms, 1500);
    assert!(!AutoplayOptions::default().pause_on_hover);
}

#[test]
fn options_controls_are_ordered_and_fullscreen_is_optional() {
    let o = SlideshowOptions::new();
    assert_eq!(
        o.controls(),
        [Control::Previous, Control::Next, Control::Position]
    );
    let o = o.with_fullscreen(true);
    assert_eq!(
        o.controls(),
        [
            Control::Previous,
            Control::Next,
            Control::Position,
            Control::Fullscreen
        ]
    );
}

#[test]
fn options_builder_sets_autoplay_and_scope() {
    let o = SlideshowOptions::new()
        .with_slide_selector(".slide")
        .with_autoplay_speed(800)
        .with_any_key_press(true);
    assert_eq!(o.slide_selector, ".slide");
    assert_eq!(o.autoplay.map(|a| a.speed_ms), Some(800));
    assert!(!o.pause_on_hover());
    assert_eq!(o.key_scope, KeyScope::Document);
    assert_eq!(AutoplayOptions::new(0).period_ms(), 1);
}

#[test]
fn empty_slide_collection_is_rejected() {
    let err = Slideshow::new(0, SlideshowOptions::new().with_slide_selector(".missing"))
        .unwrap_err();
    assert_eq!(
        err,
        SlideshowError::NoSlides {
            selector: ".missing".into()
        }
    );
}

#[test]
fn new_slideshow_shows_first_slide() {
    let s = Slideshow::new(5, SlideshowOptions::new()).unwrap();
    assert_eq!(s.current_index(), 0);
    assert_eq!(visible(&s), [0]);
    assert_eq!(s.playback(), PlaybackState::Off);
    assert_eq!(s.active_timers(), 0);
}

#[test]
fn show_slide_keeps_exactly_one_slide_visible() {
    let mut s = Slideshow::new(5, SlideshowOptions::new()).unwrap();
    for i in [3usize, 0, 4, 2, 2, 1] {
        s.show_slide(i);
        assert_eq!(visible(&s), [i]);
        assert_eq!(s.visible_count(), 1);
        assert!((0..5).all(|j| s.is_visible(j) == (j == i)));
    }
}

#[test]
fn position_label_reads_one_based_text_and_link() {
    let mut s = Slideshow::new(5, SlideshowOptions::new()).unwrap();
    assert_eq!(s.position_label().to_string(), "1 of 5");
    s.show_slide(2);
    let label = s.position_label();
    assert_eq!(label.to_string(), "3 of 5");
    assert_eq!(label.href(), "#slide3");
    assert_eq!(label.to_html(), "<a href=\"#slide3\">3 of 5</a>");
}

#[test]
fn navigation_wraps_around_both_ends() {
    let mut s = Slideshow::new(4, SlideshowOptions::new()).unwrap();
    assert_eq!(s.prev(), 3);
    assert_eq!(s.next(), 0);
    assert_eq!(s.next(), 1);
    s.show_slide(3);
    assert_eq!(s.show_current(Direction::Forward), 0);
}

#[test]
fn single_slide_navigation_stays_put() {
    let mut s = Slideshow::new(1, SlideshowOptions::new()).unwrap();
    assert_eq!(s.next(), 0);
    assert_eq!(s.prev(), 0);
}

#[test]
fn direction_from_step_follows_sign() {
    assert_eq!(Direction::from_step(1), Direction::Forward);
    assert_eq!(Direction::from_step(-1), Direction::Backward);
    assert_eq!(Direction::from_step(0), Direction::Backward);
    assert_eq!(Direction::Backward.step(), -1);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "out-of-range index")]
fn show_slide_out_of_range_is_a_caller_bug() {
    let mut s = Slideshow::new(3, SlideshowOptions::new()).unwrap();
    s.show_slide(3);
}

#[test]
fn deep_link_parsing() {
    assert_eq!(DeepLink::parse("#no-slides"), DeepLink::ShowAll);
    assert_eq!(DeepLink::parse("no-slides"), DeepLink::ShowAll);
    assert_eq!(DeepLink::parse("#slide3"), DeepLink::Slide(3));
    assert_eq!(DeepLink::parse("slide03"), DeepLink::Slide(3));
    assert_eq!(DeepLink::parse("#slide"), DeepLink::Unrecognized);
    assert_eq!(DeepLink::parse("#slide-1"), DeepLink::Unrecognized);
    assert_eq!(DeepLink::parse("#slide2x"), DeepLink::Unrecognized);
    assert_eq!(DeepLink::parse("#Slide2"), DeepLink::Unrecognized);
    assert_eq!(DeepLink::parse(""), DeepLink::Unrecognized);
    assert_eq!(DeepLink::parse("#slide99999999999999999999999"), DeepLink::Unrecognized);
    assert_eq!(DeepLink::from_fragment(None), DeepLink::Unrecognized);
}

#[test]
fn deep_link_resolution_checks_range() {
    assert_eq!(DeepLink::Slide(3).resolve(5), Some(2));
    assert_eq!(DeepLink::Slide(5).resolve(5), Some(4));
    assert_eq!(DeepLink::Slide(9).resolve(5), None);
    assert_eq!(DeepLink::Slide(0).resolve(5), None);
    assert_eq!(DeepLink::ShowAll.resolve(5), None);
    assert_eq!(slide_fragment(0), "slide1");
}

#[test]
fn deep_link_selects_initial_slide() {
    let mut s = Slideshow::new(5, SlideshowOptions::new()).unwrap();
    assert!(s.apply_deep_link(&DeepLink::parse("#slide3")));
    assert_eq!(visible(&s), [2]);
    assert_eq!(s.position_label().to_string(), "3 of 5");

    let mut s = Slideshow::new(5, SlideshowOptions::new()).unwrap();
    assert!(!s.apply_deep_link(&DeepLink::parse("#slide9")));
    assert_eq!(visible(&s), [0]);

    let mut s = Slideshow::new(5, SlideshowOptions::new()).unwrap();
    assert!(!s.apply_deep_link(&DeepLink::parse("#intro")));
    assert_eq!(visible(&s), [0]);
}

#[test]
fn show_all_marks_every_slide_until_next_transition() {
    let mut s = Slideshow::new(5, SlideshowOptions::new()).unwrap();
    assert!(s.apply_deep_link(&DeepLink::parse("#no-slides")));
    assert!(s.is_show_all());
    assert_eq!(visible(&s), [0, 1, 2, 3, 4]);
    assert_eq!(s.visible_count(), 5);

    s.next();
    assert!(!s.is_show_all());
    assert_eq!(visible(&s), [1]);
}

#[test]
fn clicks_on_controls_navigate() {
    let mut s = Slideshow::new(3, SlideshowOptions::new()).unwrap();
    assert_eq!(
        s.handle(Input::Click(Control::Next), 0),
        Outcome::Navigated { index: 1 }
    );
    assert_eq!(
        s.handle(Input::Click(Control::Previous), 0),
        Outcome::Navigated { index: 0 }
    );
    assert_eq!(
        s.handle(Input::Click(Control::Previous), 0),
        Outcome::Navigated { index: 2 }
    );
    assert!(s.handle(Input::Click(Control::Position), 0).is_ignored());
}

#[test]
fn fullscreen_click_only_when_enabled() {
    let mut s = Slideshow::new(3, SlideshowOptions::new()).unwrap();
    assert!(s.handle(Input::Click(Control::Fullscreen), 0).is_ignored());

    let mut s = Slideshow::new(3, SlideshowOptions::new().with_fullscreen(true)).unwrap();
    assert_eq!(
        s.handle(Input::Click(Control::Fullscreen), 0),
        Outcome::ToggleFullscreen
    );
    assert_eq!(s.current_index(), 0);
}

#[test]
fn arrow_keys_respect_listener_scope() {
    let left = |origin| Input::Key {
        key: Key::from_code(37),
        origin,
    };
    let right = |origin| Input::Key {
        key: Key::from_code(39),
        origin,
    };

    let mut s = Slideshow::new(4, SlideshowOptions::new()).unwrap();
    assert_eq!(
        s.handle(left(KeyScope::Container), 0),
        Outcome::Navigated { index: 3 }
    );
    assert!(s.handle(right(KeyScope::Document), 0).is_ignored());
    assert_eq!(s.current_index(), 3);

    let mut s = Slideshow::new(4, SlideshowOptions::new().with_any_key_press(true)).unwrap();
    assert!(s.handle(right(KeyScope::Container), 0).is_ignored());
    assert_eq!(
        s.handle(right(KeyScope::Document), 0),
        Outcome::Navigated { index: 1 }
    );

    let other = Input::Key {
        key: Key::from_code(13),
        origin: KeyScope::Document,
    };
    assert!(s.handle(other, 0).is_ignored());
    assert_eq!(Key::from_code(13), Key::Other(13));
}

#[test]
fn swipes_navigate_only_when_enabled() {
    let mut s = Slideshow::new(4, SlideshowOptions::new()).unwrap();
    assert!(s.handle(Input::Swipe(Swipe::Left), 0).is_ignored());

    let mut s = Slideshow::new(4, SlideshowOptions::new().with_swipe(true)).unwrap();
    assert_eq!(
        s.handle(Input::Swipe(Swipe::Left), 0),
        Outcome::Navigated { index: 1 }
    );
    assert_eq!(
        s.handle(Input::Swipe(Swipe::Right), 0),
        Outcome::Navigated { index: 0 }
    );
    assert_eq!(
        s.handle(Input::Swipe(Swipe::Right), 0),
        Outcome::Navigated { index: 3 }
    );
}

#[test]
fn autoplay_advances_once_per_period() {
    let mut s = Slideshow::new(3, autoplay_options(1000, false)).unwrap();
    assert_eq!(s.tick(5000), 0, "autoplay must be started first");

    assert!(s.start_autoplay(0));
    assert!(!s.start_autoplay(0));
    assert_eq!(s.playback(), PlaybackState::Running);
    assert_eq!(s.active_timers(), 1);

    assert_eq!(s.tick(999), 0);
    assert_eq!(s.current_index(), 0);
    assert_eq!(s.tick(1000), 1);
    assert_eq!(s.current_index(), 1);
    assert_eq!(s.tick(1500), 0);
    assert_eq!(s.tick(2000), 1);
    assert_eq!(s.current_index(), 2);
    assert_eq!(s.tick(3000), 1);
    assert_eq!(s.current_index(), 0);
}

#[test]
fn autoplay_catches_up_missed_periods_in_one_transition() {
    let mut s = Slideshow::new(4, autoplay_options(100, false)).unwrap();
    let changes = Arc::new(AtomicUsize::new(0));
    s.set_on_change(Some({
        let changes = Arc::clone(&changes);
        move |_: &Slideshow| {
            changes.fetch_add(1, Ordering::Relaxed);
        }
    }));
    s.start_autoplay(0);
    assert_eq!(s.tick(550), 5);
    assert_eq!(s.current_index(), 1);
    assert_eq!(changes.load(Ordering::Relaxed), 1);
    assert_eq!(s.tick(599), 0);
    assert_eq!(s.tick(600), 1);
    assert_eq!(s.current_index(), 2);
}

#[test]
fn start_autoplay_without_configuration_is_noop() {
    let mut s = Slideshow::new(3, SlideshowOptions::new()).unwrap();
    assert!(!s.start_autoplay(0));
    assert_eq!(s.playback(), PlaybackState::Off);
    assert!(s.handle(Input::PointerEnter, 0).is_ignored());
    assert!(s.handle(Input::PointerLeave, 0).is_ignored());
}

#[test]
fn hover_is_ignored_without_pause_on_hover() {
    let mut s = Slideshow::new(3, autoplay_options(1000, false)).unwrap();
    s.start_autoplay(0);
    assert!(s.handle(Input::PointerEnter, 10).is_ignored());
    assert_eq!(s.playback(), PlaybackState::Running);
    assert_eq!(s.tick(1000), 1);
}

#[test]
fn pause_is_idempotent() {
    let mut s = Slideshow::new(3, autoplay_options(1000, true)).unwrap();
    s.start_autoplay(0);
    assert_eq!(s.handle(Input::PointerEnter, 10), Outcome::Paused);
    assert!(s.handle(Input::PointerEnter, 20).is_ignored());
    assert_eq!(s.active_timers(), 0);
    assert_eq!(s.playback(), PlaybackState::Paused);
    assert_eq!(s.tick(10_000), 0);
    assert_eq!(s.current_index(), 0);
}

#[test]
fn resume_never_creates_a_second_timer() {
    let mut s = Slideshow::new(3, autoplay_options(1000, true)).unwrap();
    s.start_autoplay(0);
    assert!(s.handle(Input::PointerLeave, 5).is_ignored());
    assert_eq!(s.active_timers(), 1);

    for round in 0..10u64 {
        let now = round * 10;
        s.handle(Input::PointerEnter, now);
        assert!(s.active_timers() <= 1);
        s.handle(Input::PointerLeave, now + 1);
        s.handle(Input::PointerLeave, now + 2);
        assert_eq!(s.active_timers(), 1);
    }
}

#[test]
fn resumed_timer_restarts_its_period() {
    let mut s = Slideshow::new(3, autoplay_options(1000, true)).unwrap();
    s.start_autoplay(0);
    s.handle(Input::PointerEnter, 900);
    assert_eq!(s.handle(Input::PointerLeave, 1500), Outcome::Resumed);
    assert_eq!(s.tick(2000), 0);
    assert_eq!(s.tick(2500), 1);
    assert_eq!(s.current_index(), 1);
}

#[test]
fn interval_poll_counts_elapsed_periods() {
    let mut i = Interval::new(100, 50);
    assert_eq!(i.next_due_ms, 150);
    assert_eq!(i.poll(149), 0);
    assert_eq!(i.poll(260), 3);
    assert_eq!(i.next_due_ms, 300);
    assert_eq!(Interval::new(0, 0).period_ms, 1);
}

#[test]
fn on_change_fires_after_each_transition() {
    let mut s = Slideshow::new(3, SlideshowOptions::new()).unwrap();
    let last = Arc::new(AtomicUsize::new(usize::MAX));
    s.set_on_change(Some({
        let last = Arc::clone(&last);
        move |s: &Slideshow| last.store(s.current_index(), Ordering::Relaxed)
    }));
    s.next();
    assert_eq!(last.load(Ordering::Relaxed), 1);
    s.prev();
    s.prev();
    assert_eq!(last.load(Ordering::Relaxed), 2);
}

#[test]
fn state_snapshot_restores_position_and_playback() {
    let mut a = Slideshow::new(5, autoplay_options(1000, true)).unwrap();
    a.start_autoplay(0);
    a.show_slide(3);
    a.handle(Input::PointerEnter, 10);
    let state = a.state();
    assert_eq!(
        state,
        SlideshowState {
            current_index: 3,
            count: 5,
            show_all: false,
            playback: PlaybackState::Paused,
        }
    );

    let mut b = Slideshow::new(5, autoplay_options(1000, true)).unwrap();
    b.restore_state(state, 100);
    assert_eq!(b.current_index(), 3);
    assert_eq!(b.playback(), PlaybackState::Paused);
    assert_eq!(b.handle(Input::PointerLeave, 200), Outcome::Resumed);
    assert_eq!(b.active_timers(), 1);
}

#[test]
fn restore_state_ignores_out_of_range_index() {
    let mut s = Slideshow::new(2, SlideshowOptions::new()).unwrap();
    s.restore_state(
        SlideshowState {
            current_index: 7,
            count: 8,
            show_all: true,
            playback: PlaybackState::Running,
        },
        0,
    );
    assert_eq!(s.current_index(), 0);
    assert!(s.is_show_all());
    assert_eq!(s.playback(), PlaybackState::Off);
}

#[test]
fn restore_state_notifies_once() {
    let mut s = Slideshow::new(4, SlideshowOptions::new()).unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    s.set_on_change(Some({
        let calls = Arc::clone(&calls);
        move |s: &Slideshow| {
            assert_eq!(s.current_index(), 2);
            assert!(s.is_show_all());
            calls.fetch_add(1, Ordering::Relaxed);
        }
    }));
    s.restore_state(
        SlideshowState {
            current_index: 2,
            count: 4,
            show_all: true,
            playback: PlaybackState::Off,
        },
        0,
    );
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    assert_eq!(visible(&s), [0, 1, 2, 3]);

    s.next();
    assert_eq!(calls.load(Ordering::Relaxed), 2);
    assert_eq!(visible(&s), [3]);
}

#[test]
fn end_to_end_autoplay_with_hover_and_wraparound() {
    let mut s = Slideshow::new(4, autoplay_options(1000, true)).unwrap();
    s.start_autoplay(0);
    s.apply_deep_link(&DeepLink::from_fragment(None));
    assert_eq!(visible(&s), [0]);

    for _ in 0..3 {
        s.handle(Input::Click(Control::Next), 100);
    }
    assert_eq!(visible(&s), [3]);
    assert_eq!(s.position_label().to_string(), "4 of 4");

    s.handle(Input::Click(Control::Next), 200);
    assert_eq!(visible(&s), [0]);

    assert_eq!(s.handle(Input::PointerEnter, 300), Outcome::Paused);
    assert_eq!(s.active_timers(), 0);

    assert_eq!(s.handle(Input::PointerLeave, 400), Outcome::Resumed);
    assert_eq!(s.active_timers(), 1);

    s.handle(Input::Click(Control::Previous), 500);
    assert_eq!(visible(&s), [3]);
    assert_eq!(s.position_label().to_string(), "4 of 4");
}
