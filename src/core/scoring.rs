use std::collections::HashSet;

use crate::models::{AvailabilitySlot, SlotBonuses, User};

/// Sentinel score meaning "candidate and reference are the same profile"
pub const SELF_SCORE: i32 = -1;

/// Upper bound the final score is clamped to
pub const MAX_SCORE: i32 = 100;

/// Calculate a match score for `candidate` relative to `reference`
///
/// Scoring formula:
/// ```text
/// base  = shared_tags / max(|candidate tags|, |reference tags|, 1) * 100
/// bonus = per reference slot, first qualifying candidate slot:
///         same year/month/day/time +25, same year/month/day +15, same year/month +5
/// score = round(min(base + bonus, 100))
/// ```
///
/// A reference without hashtags scores 0 against anything, including itself;
/// the empty-tags check runs before the self check. A candidate scored
/// against its own profile yields the -1 sentinel.
pub fn compute_match_score(candidate: &User, reference: &User, bonuses: &SlotBonuses) -> i32 {
    if reference.hashtags.is_empty() {
        return 0;
    }
    if candidate.id == reference.id {
        return SELF_SCORE;
    }

    let candidate_tags = normalized_tags(&candidate.hashtags);
    let reference_tags = normalized_tags(&reference.hashtags);

    let shared = reference_tags.intersection(&candidate_tags).count();
    let denominator = candidate_tags.len().max(reference_tags.len()).max(1);
    let base = shared as f64 / denominator as f64 * 100.0;

    let bonus = availability_bonus(&reference.availability, &candidate.availability, bonuses);

    (base + bonus).min(MAX_SCORE as f64).round() as i32
}

/// Lowercase a tag list into a set; duplicates and casing collapse.
#[inline]
fn normalized_tags(tags: &[String]) -> HashSet<String> {
    tags.iter().map(|t| t.to_lowercase()).collect()
}

/// Sum availability bonuses. Each reference slot earns at most one bonus,
/// from the first candidate slot that qualifies for it.
#[inline]
fn availability_bonus(
    reference: &[AvailabilitySlot],
    candidate: &[AvailabilitySlot],
    bonuses: &SlotBonuses,
) -> f64 {
    let mut total = 0.0;
    for rs in reference {
        for cs in candidate {
            if rs.year == cs.year && rs.month == cs.month && rs.day == cs.day && rs.time == cs.time
            {
                total += bonuses.exact;
                break;
            } else if rs.year == cs.year && rs.month == cs.month && rs.day == cs.day {
                total += bonuses.same_day;
                break;
            } else if rs.year == cs.year && rs.month == cs.month {
                total += bonuses.same_month;
                break;
            }
        }
    }
    total
}
