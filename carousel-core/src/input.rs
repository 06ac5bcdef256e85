//! The closed input-event set and the input-to-transition table.

/// Where an activation (click or equivalent) originated, as reported by the
/// stage's delegated container listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationTarget {
    /// An indicator, carrying its raw identity tag.
    Indicator(String),
    /// The container background or a non-indicator child.
    Container,
}

/// One user input, already stripped of presentation detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    NextControl,
    PrevControl,
    ArrowRight,
    ArrowLeft,
    Activation(ActivationTarget),
}

/// A named state change on the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Advance,
    Retreat,
    JumpTo(String),
}

/// Map an input to its transition.
///
/// Activations that did not originate on an indicator are dropped here: the
/// container listens for everything, the element identity decides.
pub fn transition_for(event: InputEvent) -> Option<Transition> {
    match event {
        InputEvent::NextControl | InputEvent::ArrowRight => Some(Transition::Advance),
        InputEvent::PrevControl | InputEvent::ArrowLeft => Some(Transition::Retreat),
        InputEvent::Activation(ActivationTarget::Indicator(tag)) => Some(Transition::JumpTo(tag)),
        InputEvent::Activation(ActivationTarget::Container) => None,
    }
}
