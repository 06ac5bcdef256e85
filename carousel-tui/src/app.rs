//! Application state — single-owner, main-thread only.

use ratatui::layout::Rect;

use carousel_core::{Controller, CarouselError, Deck, InputEvent, Stage};

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// One dot indicator as retained by the stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dot {
    /// Raw identity tag, read back when the dot is clicked.
    pub tag: String,
    pub active: bool,
}

/// Retained presentation state the controller writes into and the renderer
/// reads from. Mutations are visible on the next frame.
#[derive(Debug, Default)]
pub struct TuiStage {
    /// Horizontal offset per slide, in percent of the slide area width.
    pub offsets: Vec<i64>,
    pub dots: Vec<Dot>,
}

impl Stage for TuiStage {
    fn insert_indicator(&mut self, index: usize) {
        self.dots.push(Dot {
            tag: index.to_string(),
            active: false,
        });
        self.offsets.push(0);
    }

    fn set_slide_offset(&mut self, slide: usize, offset_pct: i64) {
        self.offsets[slide] = offset_pct;
    }

    fn clear_active_indicators(&mut self) {
        for dot in &mut self.dots {
            dot.active = false;
        }
    }

    fn mark_indicator_active(&mut self, index: usize) {
        self.dots[index].active = true;
    }
}

/// Screen regions recorded by the last draw, used to resolve mouse clicks.
#[derive(Debug, Clone, Default)]
pub struct Regions {
    pub slide_area: Rect,
    pub prev_control: Rect,
    pub next_control: Rect,
    pub dot_strip: Rect,
    /// One cell per dot, in dot order. Zero-sized when off-screen.
    pub dot_cells: Vec<Rect>,
    pub status_bar: Rect,
}

/// Top-level application state.
pub struct AppState {
    pub deck: Deck,
    pub controller: Controller,
    pub stage: TuiStage,
    pub regions: Regions,
    pub running: bool,
    pub status_message: Option<(String, StatusLevel)>,
}

impl AppState {
    pub fn new(deck: Deck) -> Result<Self, CarouselError> {
        let mut stage = TuiStage::default();
        let controller = Controller::init(deck.len(), &mut stage)?;
        Ok(Self {
            deck,
            controller,
            stage,
            regions: Regions::default(),
            running: true,
            status_message: None,
        })
    }

    /// Feed one slider input to the controller and refresh the status line.
    pub fn apply(&mut self, event: InputEvent) {
        self.controller.handle(event, &mut self.stage);
        self.set_status(format!(
            "Slide {}/{}",
            self.controller.current() + 1,
            self.controller.slide_count()
        ));
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carousel_core::ActivationTarget;

    #[test]
    fn new_app_starts_on_slide_zero() {
        let app = AppState::new(Deck::sample()).unwrap();
        assert_eq!(app.controller.current(), 0);
        assert_eq!(app.stage.dots.len(), 3);
        assert!(app.stage.dots[0].active);
        assert_eq!(app.stage.offsets, vec![0, 100, 200]);
    }

    #[test]
    fn stage_dots_carry_index_tags() {
        let app = AppState::new(Deck::sample()).unwrap();
        let tags: Vec<&str> = app.stage.dots.iter().map(|d| d.tag.as_str()).collect();
        assert_eq!(tags, vec!["0", "1", "2"]);
    }

    #[test]
    fn apply_updates_stage_and_status() {
        let mut app = AppState::new(Deck::sample()).unwrap();
        app.apply(InputEvent::NextControl);
        assert_eq!(app.controller.current(), 1);
        assert!(app.stage.dots[1].active);
        assert!(!app.stage.dots[0].active);
        let (msg, level) = app.status_message.clone().unwrap();
        assert_eq!(msg, "Slide 2/3");
        assert_eq!(level, StatusLevel::Info);
    }

    #[test]
    fn malformed_dot_tag_is_a_no_op() {
        let mut app = AppState::new(Deck::sample()).unwrap();
        app.apply(InputEvent::Activation(ActivationTarget::Indicator(
            "bogus".into(),
        )));
        assert_eq!(app.controller.current(), 0);
        assert!(app.stage.dots[0].active);
    }
}
