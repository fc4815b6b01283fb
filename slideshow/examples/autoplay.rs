// Example: adapter-driven autoplay with pause-on-hover.
use slideshow::{AutoplayOptions, Input, Slideshow, SlideshowOptions};

fn main() {
    let opts = SlideshowOptions::new()
        .with_autoplay(Some(AutoplayOptions::new(1000).with_pause_on_hover(true)));
    let mut s = Slideshow::new(4, opts).expect("four slides");
    s.set_on_change(Some(|s: &Slideshow| println!("  -> {}", s.position_label())));
    s.start_autoplay(0);

    // Simulated frame loop at ~4 Hz; the pointer hovers between 2.2s and 4.8s.
    for now_ms in (0..8000u64).step_by(250) {
        if now_ms == 2250 {
            println!("pointer enter: {:?}", s.handle(Input::PointerEnter, now_ms));
        }
        if now_ms == 4750 {
            println!("pointer leave: {:?}", s.handle(Input::PointerLeave, now_ms));
        }
        s.tick(now_ms);
    }
    println!("final state: {:?}", s.state());
}
