use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Race event categories for highlight classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventCategory {
    RaceStart,
    Overtake,
    Collision,
    Dnf,
    SafetyCar,
    VirtualSafetyCar,
    PodiumFinish,
    Penalty,
    FastestLap,
    PitStop,
    PolePosition,
    WeatherChange,
}

impl EventCategory {
    /// Display title used for detected events
    pub fn title(&self) -> &'static str {
        match self {
            EventCategory::RaceStart => "Race Start",
            EventCategory::Overtake => "Overtake",
            EventCategory::Collision => "Collision",
            EventCategory::Dnf => "Retirement",
            EventCategory::SafetyCar => "Safety Car",
            EventCategory::VirtualSafetyCar => "Virtual Safety Car",
            EventCategory::PodiumFinish => "Podium Finish",
            EventCategory::Penalty => "Penalty",
            EventCategory::FastestLap => "Fastest Lap",
            EventCategory::PitStop => "Pit Stop",
            EventCategory::PolePosition => "Pole Position",
            EventCategory::WeatherChange => "Weather Change",
        }
    }
}

/// A single trigger phrase mapped to its event category
#[derive(Debug, Clone)]
pub struct TriggerEntry {
    /// Lower-cased phrase matched by substring containment
    pub phrase: &'static str,
    /// Category produced when the phrase matches
    pub category: EventCategory,
}

/// Neutral importance for categories without an explicit base score
const DEFAULT_BASE_IMPORTANCE: u8 = 5;

/// Catalog of trigger phrases, base importance scores and emphasis words
///
/// Built once at startup and shared read-only; classification order follows
/// the trigger list order, so the list is kept explicitly ordered rather
/// than keyed by phrase.
#[derive(Debug, Clone)]
pub struct HighlightCatalog {
    /// Ordered trigger phrases (many phrases may map to one category)
    triggers: Vec<TriggerEntry>,

    /// Base importance per category
    base_importance: HashMap<EventCategory, u8>,

    /// Commentary emphasis words worth an importance bonus
    emphasis_words: Vec<&'static str>,
}

impl HighlightCatalog {
    /// Create the catalog with the default trigger and scoring tables
    pub fn new() -> Self {
        let mut catalog = Self {
            triggers: Vec::new(),
            base_importance: HashMap::new(),
            emphasis_words: vec![
                "spectacular",
                "incredible",
                "amazing",
                "brilliant",
                "dramatic",
            ],
        };

        catalog.load_default_triggers();
        catalog.load_default_importance();
        catalog
    }

    /// Ordered trigger table
    pub fn triggers(&self) -> &[TriggerEntry] {
        &self.triggers
    }

    /// Base importance for a category, neutral score when unscored
    pub fn base_importance(&self, category: EventCategory) -> u8 {
        self.base_importance
            .get(&category)
            .copied()
            .unwrap_or(DEFAULT_BASE_IMPORTANCE)
    }

    /// Emphasis words checked case-insensitively against entry text
    pub fn emphasis_words(&self) -> &[&'static str] {
        &self.emphasis_words
    }

    /// Default trigger phrases heard in English race commentary
    fn load_default_triggers(&mut self) {
        let triggers = vec![
            ("lights out", EventCategory::RaceStart),
            ("race is underway", EventCategory::RaceStart),
            ("we go racing", EventCategory::RaceStart),
            ("overtake", EventCategory::Overtake),
            ("passes", EventCategory::Overtake),
            ("down the inside", EventCategory::Overtake),
            ("round the outside", EventCategory::Overtake),
            ("takes the lead", EventCategory::Overtake),
            ("makes the move", EventCategory::Overtake),
            ("collision", EventCategory::Collision),
            ("contact", EventCategory::Collision),
            ("crash", EventCategory::Collision),
            ("into the barriers", EventCategory::Collision),
            ("into the wall", EventCategory::Collision),
            ("retires", EventCategory::Dnf),
            ("retirement", EventCategory::Dnf),
            ("out of the race", EventCategory::Dnf),
            ("mechanical failure", EventCategory::Dnf),
            ("engine has let go", EventCategory::Dnf),
            ("safety car", EventCategory::SafetyCar),
            ("virtual safety car", EventCategory::VirtualSafetyCar),
            ("vsc", EventCategory::VirtualSafetyCar),
            ("chequered flag", EventCategory::PodiumFinish),
            ("wins the", EventCategory::PodiumFinish),
            ("takes victory", EventCategory::PodiumFinish),
            ("podium", EventCategory::PodiumFinish),
            ("penalty", EventCategory::Penalty),
            ("penalised", EventCategory::Penalty),
            ("penalized", EventCategory::Penalty),
            ("under investigation", EventCategory::Penalty),
            ("stewards", EventCategory::Penalty),
            ("fastest lap", EventCategory::FastestLap),
            ("pit stop", EventCategory::PitStop),
            ("box box", EventCategory::PitStop),
            ("into the pit lane", EventCategory::PitStop),
            ("pits", EventCategory::PitStop),
            ("pole position", EventCategory::PolePosition),
            ("takes pole", EventCategory::PolePosition),
            ("on pole", EventCategory::PolePosition),
            ("rain", EventCategory::WeatherChange),
            ("track is wet", EventCategory::WeatherChange),
            ("downpour", EventCategory::WeatherChange),
        ];

        self.triggers = triggers
            .into_iter()
            .map(|(phrase, category)| TriggerEntry { phrase, category })
            .collect();
    }

    /// Default base importance scores
    ///
    /// PitStop and WeatherChange are left unscored and fall back to the
    /// neutral default.
    fn load_default_importance(&mut self) {
        let scores = vec![
            (EventCategory::RaceStart, 9),
            (EventCategory::Overtake, 7),
            (EventCategory::Collision, 8),
            (EventCategory::Dnf, 8),
            (EventCategory::SafetyCar, 7),
            (EventCategory::VirtualSafetyCar, 6),
            (EventCategory::PodiumFinish, 8),
            (EventCategory::Penalty, 6),
            (EventCategory::FastestLap, 6),
            (EventCategory::PolePosition, 6),
        ];

        for (category, score) in scores {
            self.base_importance.insert(category, score);
        }
    }
}

impl Default for HighlightCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_triggers() {
        let catalog = HighlightCatalog::new();

        assert!(!catalog.triggers().is_empty());
        assert!(catalog
            .triggers()
            .iter()
            .any(|t| t.category == EventCategory::Overtake));
        assert!(catalog
            .triggers()
            .iter()
            .any(|t| t.phrase == "safety car"));
    }

    #[test]
    fn test_base_importance_scores() {
        let catalog = HighlightCatalog::new();

        assert_eq!(catalog.base_importance(EventCategory::Overtake), 7);
        assert_eq!(catalog.base_importance(EventCategory::RaceStart), 9);
        assert_eq!(catalog.base_importance(EventCategory::Collision), 8);
    }

    #[test]
    fn test_unscored_category_defaults_to_neutral() {
        let catalog = HighlightCatalog::new();

        assert_eq!(catalog.base_importance(EventCategory::PitStop), 5);
        assert_eq!(catalog.base_importance(EventCategory::WeatherChange), 5);
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&EventCategory::SafetyCar).unwrap();
        assert_eq!(json, "\"SAFETY_CAR\"");

        let json = serde_json::to_string(&EventCategory::Dnf).unwrap();
        assert_eq!(json, "\"DNF\"");

        let parsed: EventCategory = serde_json::from_str("\"RACE_START\"").unwrap();
        assert_eq!(parsed, EventCategory::RaceStart);
    }

    #[test]
    fn test_emphasis_words() {
        let catalog = HighlightCatalog::new();

        assert!(catalog.emphasis_words().contains(&"brilliant"));
        assert_eq!(catalog.emphasis_words().len(), 5);
    }
}
