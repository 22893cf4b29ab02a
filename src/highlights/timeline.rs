/// Final timeline assembly: ordering, race-start injection, field stripping
use super::catalog::EventCategory;
use super::classifier::CandidateEvent;
use super::HighlightEvent;
use std::cmp::Ordering;

/// Description used for the synthesized race-start event
const SYNTHETIC_RACE_START_DESCRIPTION: &str =
    "Lights out and away we go - the race is underway";

/// Importance assigned to the synthesized race-start event
const SYNTHETIC_RACE_START_IMPORTANCE: u8 = 9;

/// Assemble the externally consumable event list
///
/// Stable sort by start time ascending with importance descending on ties,
/// guarantee exactly one race-start event, and strip the raw start time
/// bookkeeping from the output.
pub fn assemble_timeline(mut candidates: Vec<CandidateEvent>) -> Vec<HighlightEvent> {
    candidates.sort_by(|a, b| {
        a.raw_start_seconds
            .partial_cmp(&b.raw_start_seconds)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.importance.cmp(&a.importance))
    });

    let mut events: Vec<HighlightEvent> =
        candidates.into_iter().map(into_event).collect();

    if !events
        .iter()
        .any(|e| e.category == EventCategory::RaceStart)
    {
        events.insert(0, synthesized_race_start());
    }

    events
}

/// Drop the raw start time bookkeeping field
fn into_event(candidate: CandidateEvent) -> HighlightEvent {
    HighlightEvent {
        timestamp: candidate.timestamp,
        category: candidate.category,
        title: candidate.title,
        description: candidate.description,
        participants: candidate.participants,
        importance: candidate.importance,
    }
}

/// Race-start event injected when none was detected in the commentary
fn synthesized_race_start() -> HighlightEvent {
    HighlightEvent {
        timestamp: "0:00".to_string(),
        category: EventCategory::RaceStart,
        title: EventCategory::RaceStart.title().to_string(),
        description: SYNTHETIC_RACE_START_DESCRIPTION.to_string(),
        participants: Vec::new(),
        importance: SYNTHETIC_RACE_START_IMPORTANCE,
    }
}
