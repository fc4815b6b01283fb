// Example: a page with two slideshow containers rendered to the console.
use slideshow::{AutoplayOptions, Control, Input, Key, PositionLabel, SlideshowOptions};
use slideshow_adapter::{FullscreenHost, Listener, Page, Presentation, Stage};

struct ConsoleStage {
    name: &'static str,
    slides: Vec<&'static str>,
    visible: Vec<bool>,
}

impl FullscreenHost for ConsoleStage {}

impl Stage for ConsoleStage {
    fn resolve_slides(&mut self, selector: &str) -> usize {
        println!("[{}] {} slides match `{selector}`", self.name, self.slides.len());
        self.visible = vec![false; self.slides.len()];
        self.slides.len()
    }

    fn set_slide_visible(&mut self, index: usize, visible: bool) {
        self.visible[index] = visible;
    }

    fn append_controls(&mut self, controls: &[Control]) {
        let names: Vec<_> = controls.iter().map(|c| c.class_name()).collect();
        println!("[{}] controls: {names:?}", self.name);
    }

    fn set_position(&mut self, label: &PositionLabel) {
        let shown: Vec<_> = self
            .slides
            .iter()
            .zip(&self.visible)
            .filter(|(_, v)| **v)
            .map(|(s, _)| *s)
            .collect();
        println!("[{}] {} -> showing {shown:?}", self.name, label.to_html());
    }

    fn listen(&mut self, listener: Listener) {
        println!("[{}] listen {listener:?}", self.name);
    }
}

struct ConsolePage;

impl Page for ConsolePage {
    type Stage = ConsoleStage;

    fn query_containers(&mut self, _selector: &str) -> Vec<ConsoleStage> {
        vec![
            ConsoleStage {
                name: "intro",
                slides: vec!["title", "agenda", "team"],
                visible: Vec::new(),
            },
            ConsoleStage {
                name: "gallery",
                slides: vec!["lake", "forest", "desert", "city"],
                visible: Vec::new(),
            },
        ]
    }

    fn fragment(&self) -> Option<String> {
        Some("#slide2".to_string())
    }
}

fn main() {
    let opts = SlideshowOptions::new()
        .with_any_key_press(true)
        .with_autoplay(Some(AutoplayOptions::new(1500).with_pause_on_hover(true)));
    let mut page = ConsolePage;
    let mut p = Presentation::mount_all(&mut page, ".bss-slides", &opts, 0);

    p.dispatch(0, Input::Click(Control::Next), 100);
    p.dispatch(1, Input::PointerEnter, 200);
    p.dispatch_document_key(Key::ArrowRight, 300);

    // Only the intro advances: the gallery is paused under the pointer.
    p.tick(1500);
    p.dispatch(1, Input::PointerLeave, 1600);
    p.tick(3100);
}
