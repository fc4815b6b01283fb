// Example: minimal usage with a deep link and a few inputs.
use slideshow::{Control, DeepLink, Input, Slideshow, SlideshowOptions};

fn main() {
    let mut s = Slideshow::new(5, SlideshowOptions::new()).expect("five slides");
    s.apply_deep_link(&DeepLink::parse("#slide3"));
    println!("initial: {} ({})", s.position_label(), s.position_label().href());

    for input in [
        Input::Click(Control::Next),
        Input::Click(Control::Next),
        Input::Click(Control::Next),
    ] {
        let outcome = s.handle(input, 0);
        println!("{input:?} -> {outcome:?}, now {}", s.position_label());
    }
}
