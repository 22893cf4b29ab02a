/// Keyword-driven event classification over transcript entries
use super::catalog::{EventCategory, HighlightCatalog};
use super::drivers::DriverRecognizer;
use super::scoring::score_importance;
use crate::transcript::TranscriptEntry;

/// A detected event before deduplication and assembly
///
/// Carries the raw start time for sorting and bucket deduplication; the
/// field is stripped when the candidate becomes a [`super::HighlightEvent`].
#[derive(Debug, Clone)]
pub struct CandidateEvent {
    pub timestamp: String,
    pub category: EventCategory,
    pub title: String,
    pub description: String,
    pub participants: Vec<String>,
    pub importance: u8,
    pub raw_start_seconds: f64,
}

/// Scans transcript entries for trigger phrases and builds candidate events
#[derive(Debug)]
pub struct EventClassifier<'a> {
    catalog: &'a HighlightCatalog,
    drivers: &'a DriverRecognizer,
}

impl<'a> EventClassifier<'a> {
    pub fn new(catalog: &'a HighlightCatalog, drivers: &'a DriverRecognizer) -> Self {
        Self { catalog, drivers }
    }

    /// Convert transcript entries into candidate events
    ///
    /// Entries are scanned in input order, triggers in catalog order. One
    /// entry may yield several candidates when it contains several distinct
    /// trigger phrases; suppressing repeats is the deduplicator's job.
    pub fn classify(&self, entries: &[TranscriptEntry]) -> Vec<CandidateEvent> {
        let mut candidates = Vec::new();

        for entry in entries {
            let lowered = entry.text.to_lowercase();

            for trigger in self.catalog.triggers() {
                if !lowered.contains(trigger.phrase) {
                    continue;
                }

                let participants = self.drivers.extract(&entry.text);
                let importance = score_importance(
                    self.catalog,
                    trigger.category,
                    &participants,
                    &entry.text,
                );

                candidates.push(CandidateEvent {
                    timestamp: format_timestamp(entry.start),
                    category: trigger.category,
                    title: trigger.category.title().to_string(),
                    description: entry.text.trim().to_string(),
                    participants,
                    importance,
                    raw_start_seconds: entry.start,
                });
            }
        }

        candidates
    }
}

/// Format seconds as "M:SS", truncating to whole seconds
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier_parts() -> (HighlightCatalog, DriverRecognizer) {
        (HighlightCatalog::new(), DriverRecognizer::new().unwrap())
    }

    #[test]
    fn test_overtake_scenario() {
        let (catalog, drivers) = classifier_parts();
        let classifier = EventClassifier::new(&catalog, &drivers);

        let entries = vec![TranscriptEntry::new(
            "Verstappen overtakes Hamilton with a brilliant move!",
            125.0,
        )];
        let candidates = classifier.classify(&entries);

        assert_eq!(candidates.len(), 1);
        let event = &candidates[0];
        assert_eq!(event.category, EventCategory::Overtake);
        assert_eq!(event.timestamp, "2:05");
        assert_eq!(event.participants, vec!["Verstappen", "Hamilton"]);
        assert_eq!(event.importance, 9);
        assert_eq!(event.raw_start_seconds, 125.0);
    }

    #[test]
    fn test_one_entry_can_yield_multiple_categories() {
        let (catalog, drivers) = classifier_parts();
        let classifier = EventClassifier::new(&catalog, &drivers);

        let entries = vec![TranscriptEntry::new(
            "Safety car deployed after contact",
            10.0,
        )];
        let candidates = classifier.classify(&entries);

        let categories: Vec<EventCategory> =
            candidates.iter().map(|c| c.category).collect();
        assert_eq!(candidates.len(), 2);
        assert!(categories.contains(&EventCategory::SafetyCar));
        assert!(categories.contains(&EventCategory::Collision));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let (catalog, drivers) = classifier_parts();
        let classifier = EventClassifier::new(&catalog, &drivers);

        let entries = vec![TranscriptEntry::new("LIGHTS OUT and away we go!", 3.0)];
        let candidates = classifier.classify(&entries);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].category, EventCategory::RaceStart);
    }

    #[test]
    fn test_no_trigger_no_candidate() {
        let (catalog, drivers) = classifier_parts();
        let classifier = EventClassifier::new(&catalog, &drivers);

        let entries = vec![TranscriptEntry::new(
            "a quiet moment as the field settles",
            42.0,
        )];

        assert!(classifier.classify(&entries).is_empty());
    }

    #[test]
    fn test_description_preserves_original_text() {
        let (catalog, drivers) = classifier_parts();
        let classifier = EventClassifier::new(&catalog, &drivers);

        let entries = vec![TranscriptEntry::new("  Norris pits from the lead  ", 90.0)];
        let candidates = classifier.classify(&entries);

        assert_eq!(candidates[0].description, "Norris pits from the lead");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(125.7), "2:05");
        assert_eq!(format_timestamp(0.0), "0:00");
        assert_eq!(format_timestamp(59.9), "0:59");
        assert_eq!(format_timestamp(600.0), "10:00");
        assert_eq!(format_timestamp(61.0), "1:01");
    }
}
