/// Importance scoring for candidate events
use super::catalog::{EventCategory, HighlightCatalog};

/// Score an event's salience on the 1-10 scale
///
/// Category base score, +1 when more than one driver is involved, +1 when
/// the commentary uses emphasis language (at most once), clamped to [1, 10].
pub fn score_importance(
    catalog: &HighlightCatalog,
    category: EventCategory,
    participants: &[String],
    text: &str,
) -> u8 {
    let mut score = i32::from(catalog.base_importance(category));

    if participants.len() > 1 {
        score += 1;
    }

    let lowered = text.to_lowercase();
    if catalog
        .emphasis_words()
        .iter()
        .any(|word| lowered.contains(word))
    {
        score += 1;
    }

    score.clamp(1, 10) as u8
}
