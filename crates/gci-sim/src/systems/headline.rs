//! Headline composition: one line of prose summarizing the turn.

use gci_core::components::Aircraft;
use gci_core::constants::HEADLINE_PLACEHOLDER;
use gci_core::events::TurnEvent;

/// Join the turn's event fragments, in resolution order, into one line.
/// A quiet turn gets the standing prompt instead.
pub fn compose(events: &[TurnEvent]) -> String {
    if events.is_empty() {
        return HEADLINE_PLACEHOLDER.to_string();
    }
    events
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Status line for an aircraft still flying at the end of its phase.
pub fn position_report(aircraft: &Aircraft) -> TurnEvent {
    TurnEvent::Position {
        kind: aircraft.kind(),
        unit: aircraft.id,
        cell: aircraft.cell(),
        heading: aircraft.heading,
    }
}
