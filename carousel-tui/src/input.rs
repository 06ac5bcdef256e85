//! Terminal event translation — crossterm keys and mouse clicks become core
//! input events; `q`/Ctrl-C quit the app.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;

use carousel_core::{ActivationTarget, InputEvent};

use crate::app::{Regions, TuiStage};

/// What a terminal event asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Slider(InputEvent),
}

/// Translate a key event. Arrow keys are global; `h`/`l` are aliases.
pub fn translate_key(key: KeyEvent) -> Option<Action> {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Slider(InputEvent::ArrowLeft)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Slider(InputEvent::ArrowRight)),
        _ => None,
    }
}

/// Resolve a mouse click against the regions recorded by the last draw.
///
/// Clicks inside the dot strip are delegated: a hit on a dot cell yields an
/// indicator activation with that dot's tag, anywhere else in the strip a
/// container activation (which the core table drops).
pub fn translate_mouse(mouse: MouseEvent, regions: &Regions, stage: &TuiStage) -> Option<Action> {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return None;
    }
    let pos = Position::new(mouse.column, mouse.row);

    if regions.prev_control.contains(pos) {
        return Some(Action::Slider(InputEvent::PrevControl));
    }
    if regions.next_control.contains(pos) {
        return Some(Action::Slider(InputEvent::NextControl));
    }
    if regions.dot_strip.contains(pos) {
        for (cell, dot) in regions.dot_cells.iter().zip(&stage.dots) {
            if cell.contains(pos) {
                return Some(Action::Slider(InputEvent::Activation(
                    ActivationTarget::Indicator(dot.tag.clone()),
                )));
            }
        }
        return Some(Action::Slider(InputEvent::Activation(
            ActivationTarget::Container,
        )));
    }
    None
}
