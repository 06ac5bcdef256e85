//! Presentation contract and the controller that drives it.
//!
//! The controller owns the carousel index privately; the stage is the only
//! thing it mutates externally, and always through this trait.

use crate::carousel::{Carousel, CarouselError};
use crate::input::{transition_for, InputEvent, Transition};

/// The presentation layer as seen by the controller.
///
/// Implementations retain whatever they need to make the effect visible;
/// the controller never queries them back.
pub trait Stage {
    /// Append one indicator, tagged with its zero-based slide index.
    fn insert_indicator(&mut self, index: usize);

    /// Translate `slide` horizontally by `offset_pct` percent.
    fn set_slide_offset(&mut self, slide: usize, offset_pct: i64);

    /// Remove the active mark from every indicator.
    fn clear_active_indicators(&mut self);

    /// Mark the indicator for `index` active. Called after the clear, so at
    /// most one indicator carries the mark at any observable point.
    fn mark_indicator_active(&mut self, index: usize);
}

/// Owns the carousel state and keeps a stage consistent with it.
pub struct Controller {
    carousel: Carousel,
}

impl Controller {
    /// Synthesize one indicator per slide, set the index to 0, and render.
    pub fn init(slide_count: usize, stage: &mut impl Stage) -> Result<Self, CarouselError> {
        let carousel = Carousel::new(slide_count)?;
        for index in 0..slide_count {
            stage.insert_indicator(index);
        }
        let controller = Self { carousel };
        controller.render(stage);
        Ok(controller)
    }

    pub fn current(&self) -> usize {
        self.carousel.current()
    }

    pub fn slide_count(&self) -> usize {
        self.carousel.slide_count()
    }

    /// Apply one input event, synchronously to completion.
    ///
    /// Invalid jump targets are dropped without a state change or a
    /// re-render; malformed indicator tags degrade to a no-op rather than
    /// surfacing anywhere.
    pub fn handle(&mut self, event: InputEvent, stage: &mut impl Stage) {
        let Some(transition) = transition_for(event) else {
            return;
        };
        match transition {
            Transition::Advance => {
                self.carousel.advance();
            }
            Transition::Retreat => {
                self.carousel.retreat();
            }
            Transition::JumpTo(raw) => {
                if self.carousel.jump(&raw).is_err() {
                    return;
                }
            }
        }
        self.render(stage);
    }

    /// Reconcile the stage with the current index: every slide gets its
    /// `(slide - current) * 100` percent offset, then the indicators are
    /// cleared and exactly the current one is re-marked.
    pub fn render(&self, stage: &mut impl Stage) {
        for slide in 0..self.carousel.slide_count() {
            stage.set_slide_offset(slide, self.carousel.offset_pct(slide));
        }
        stage.clear_active_indicators();
        stage.mark_indicator_active(self.carousel.current());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ActivationTarget;

    /// Records everything the controller does to it.
    #[derive(Debug, Default)]
    struct RecordingStage {
        indicators: Vec<usize>,
        offsets: Vec<i64>,
        active: Vec<bool>,
    }

    impl Stage for RecordingStage {
        fn insert_indicator(&mut self, index: usize) {
            assert_eq!(index, self.indicators.len());
            self.indicators.push(index);
            self.offsets.push(0);
            self.active.push(false);
        }

        fn set_slide_offset(&mut self, slide: usize, offset_pct: i64) {
            self.offsets[slide] = offset_pct;
        }

        fn clear_active_indicators(&mut self) {
            for a in &mut self.active {
                *a = false;
            }
        }

        fn mark_indicator_active(&mut self, index: usize) {
            self.active[index] = true;
        }
    }

    impl RecordingStage {
        fn active_indices(&self) -> Vec<usize> {
            self.active
                .iter()
                .enumerate()
                .filter(|(_, a)| **a)
                .map(|(i, _)| i)
                .collect()
        }
    }

    #[test]
    fn init_builds_indicators_and_renders_slide_zero() {
        let mut stage = RecordingStage::default();
        let controller = Controller::init(5, &mut stage).unwrap();

        assert_eq!(controller.current(), 0);
        assert_eq!(stage.indicators, vec![0, 1, 2, 3, 4]);
        assert_eq!(stage.offsets, vec![0, 100, 200, 300, 400]);
        assert_eq!(stage.active_indices(), vec![0]);
    }

    #[test]
    fn init_rejects_zero_slides() {
        let mut stage = RecordingStage::default();
        assert!(Controller::init(0, &mut stage).is_err());
    }

    #[test]
    fn advance_shifts_offsets_and_indicator() {
        let mut stage = RecordingStage::default();
        let mut controller = Controller::init(3, &mut stage).unwrap();

        controller.handle(InputEvent::NextControl, &mut stage);
        assert_eq!(controller.current(), 1);
        assert_eq!(stage.offsets, vec![-100, 0, 100]);
        assert_eq!(stage.active_indices(), vec![1]);
    }

    #[test]
    fn jump_to_indicator_syncs_exactly_one_active() {
        let mut stage = RecordingStage::default();
        let mut controller = Controller::init(4, &mut stage).unwrap();

        controller.handle(
            InputEvent::Activation(ActivationTarget::Indicator("2".into())),
            &mut stage,
        );
        assert_eq!(controller.current(), 2);
        assert_eq!(stage.active_indices(), vec![2]);
        assert_eq!(stage.offsets, vec![-200, -100, 0, 100]);
    }

    #[test]
    fn invalid_jump_leaves_state_and_stage_untouched() {
        let mut stage = RecordingStage::default();
        let mut controller = Controller::init(4, &mut stage).unwrap();
        controller.handle(InputEvent::NextControl, &mut stage);

        let offsets_before = stage.offsets.clone();
        for raw in ["9", "nope", "-1", ""] {
            controller.handle(
                InputEvent::Activation(ActivationTarget::Indicator(raw.into())),
                &mut stage,
            );
            assert_eq!(controller.current(), 1);
            assert_eq!(stage.offsets, offsets_before);
            assert_eq!(stage.active_indices(), vec![1]);
        }
    }

    #[test]
    fn container_activation_is_ignored() {
        let mut stage = RecordingStage::default();
        let mut controller = Controller::init(3, &mut stage).unwrap();

        controller.handle(
            InputEvent::Activation(ActivationTarget::Container),
            &mut stage,
        );
        assert_eq!(controller.current(), 0);
        assert_eq!(stage.active_indices(), vec![0]);
    }

    #[test]
    fn full_wrap_cycle_returns_to_start() {
        let mut stage = RecordingStage::default();
        let mut controller = Controller::init(3, &mut stage).unwrap();

        for _ in 0..3 {
            controller.handle(InputEvent::ArrowRight, &mut stage);
        }
        assert_eq!(controller.current(), 0);
        assert_eq!(stage.active_indices(), vec![0]);
        assert_eq!(stage.offsets, vec![0, 100, 200]);
    }
}
