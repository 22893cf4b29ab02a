/// Suppression of repeated same-category detections within a time window
use super::catalog::EventCategory;
use super::classifier::CandidateEvent;
use std::collections::HashSet;

/// Width of the absolute dedup bucket in seconds
const DEDUP_BUCKET_SECONDS: f64 = 30.0;

/// Absolute bucket index for a start time
///
/// Buckets are fixed and aligned to transcript time zero, not to the first
/// occurrence of a category. Detections at 0:29 and 0:31 land in different
/// buckets and are both kept even though only two seconds apart.
fn bucket_for(start_seconds: f64) -> i64 {
    (start_seconds / DEDUP_BUCKET_SECONDS).floor() as i64
}

/// Drop candidates repeating a category within the same 30-second bucket
///
/// Input order (transcript order, catalog order within an entry) is
/// preserved; the first candidate of a signature wins.
pub fn dedupe_candidates(candidates: Vec<CandidateEvent>) -> Vec<CandidateEvent> {
    let mut seen: HashSet<(EventCategory, i64)> = HashSet::new();
    let mut kept = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let signature = (candidate.category, bucket_for(candidate.raw_start_seconds));
        if seen.insert(signature) {
            kept.push(candidate);
        }
    }

    kept
}
