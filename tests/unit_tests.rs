// Unit tests for Partner Match

use partner_match::core::{compute_match_score, Matcher, MAX_SCORE, SELF_SCORE};
use partner_match::models::{AvailabilitySlot, ScoredMatch, SlotBonuses, TimeSlot, User};

fn user(id: &str, tags: &[&str]) -> User {
    User {
        id: id.to_string(),
        nick_name: format!("User {}", id),
        bio: String::new(),
        hashtags: tags.iter().map(|t| t.to_string()).collect(),
        availability: vec![],
    }
}

fn slot(year: i32, month: u32, day: u32, time: TimeSlot) -> AvailabilitySlot {
    AvailabilitySlot {
        year,
        month,
        day,
        time,
    }
}

#[test]
fn test_self_score_is_sentinel() {
    let bonuses = SlotBonuses::default();
    for tags in [&["#hiking"][..], &["#hiking", "#coffee"][..]] {
        let u = user("u", tags);
        assert_eq!(compute_match_score(&u, &u, &bonuses), SELF_SCORE);
    }
}

#[test]
fn test_empty_reference_always_scores_zero() {
    let bonuses = SlotBonuses::default();
    let reference = user("ref", &[]);

    let mut candidate = user("cand", &["#hiking", "#coffee"]);
    candidate.availability = vec![slot(2025, 3, 15, TimeSlot::Morning)];

    assert_eq!(compute_match_score(&candidate, &reference, &bonuses), 0);
    // The empty-tags rule outranks the self rule.
    assert_eq!(compute_match_score(&reference, &reference, &bonuses), 0);
}

#[test]
fn test_documented_tag_fraction_example() {
    // Reference {#hiking, #coffee}, candidate {#hiking, #coffee, #yoga}:
    // overlap 2, denominator max(2, 3) = 3, fraction 66.67 -> 67.
    let reference = user("ref", &["#hiking", "#coffee"]);
    let candidate = user("cand", &["#hiking", "#coffee", "#yoga"]);

    assert_eq!(
        compute_match_score(&candidate, &reference, &SlotBonuses::default()),
        67
    );
}

#[test]
fn test_documented_slot_bonus_examples() {
    let bonuses = SlotBonuses::default();
    let mut reference = user("ref", &["#hiking"]);
    reference.availability = vec![slot(2025, 3, 15, TimeSlot::Morning)];

    // No tag overlap keeps the base at 0 so the bonus is visible alone.
    let mut exact = user("cand", &["#yoga"]);
    exact.availability = vec![slot(2025, 3, 15, TimeSlot::Morning)];
    assert_eq!(compute_match_score(&exact, &reference, &bonuses), 25);

    let mut same_day = user("cand", &["#yoga"]);
    same_day.availability = vec![slot(2025, 3, 15, TimeSlot::Afternoon)];
    assert_eq!(compute_match_score(&same_day, &reference, &bonuses), 15);

    let mut same_month = user("cand", &["#yoga"]);
    same_month.availability = vec![slot(2025, 3, 22, TimeSlot::Morning)];
    assert_eq!(compute_match_score(&same_month, &reference, &bonuses), 5);
}

#[test]
fn test_score_stays_in_range() {
    let bonuses = SlotBonuses::default();
    let tag_pool = ["#hiking", "#coffee", "#yoga", "#movies", "#art"];

    for reference_size in 0..tag_pool.len() {
        for candidate_size in 0..tag_pool.len() {
            let mut reference = user("ref", &tag_pool[..reference_size]);
            let mut candidate = user("cand", &tag_pool[..candidate_size]);
            reference.availability = vec![
                slot(2025, 3, 15, TimeSlot::Morning),
                slot(2025, 3, 16, TimeSlot::Evening),
                slot(2025, 4, 1, TimeSlot::Flexible),
            ];
            candidate.availability = vec![
                slot(2025, 3, 15, TimeSlot::Morning),
                slot(2025, 4, 1, TimeSlot::Flexible),
            ];

            let score = compute_match_score(&candidate, &reference, &bonuses);
            assert!(
                (SELF_SCORE..=MAX_SCORE).contains(&score),
                "score {} out of range for sizes ({}, {})",
                score,
                reference_size,
                candidate_size
            );
        }
    }
}

#[test]
fn test_tag_fraction_symmetric_for_equal_set_sizes() {
    let bonuses = SlotBonuses::default();
    let a = user("a", &["#hiking", "#coffee"]);
    let b = user("b", &["#hiking", "#yoga"]);

    assert_eq!(
        compute_match_score(&a, &b, &bonuses),
        compute_match_score(&b, &a, &bonuses)
    );
}

#[test]
fn test_overall_score_not_symmetric() {
    // Bonuses accrue per reference slot, so whoever has more slots on the
    // reference side collects more. Documented behavior, not a defect.
    let bonuses = SlotBonuses::default();
    let mut a = user("a", &["#hiking", "#art"]);
    let mut b = user("b", &["#hiking", "#food"]);
    a.availability = vec![
        slot(2025, 3, 15, TimeSlot::Morning),
        slot(2025, 3, 16, TimeSlot::Morning),
    ];
    b.availability = vec![slot(2025, 3, 15, TimeSlot::Morning)];

    let b_for_a = compute_match_score(&b, &a, &bonuses); // 50 + 25 + 5
    let a_for_b = compute_match_score(&a, &b, &bonuses); // 50 + 25
    assert_eq!(b_for_a, 80);
    assert_eq!(a_for_b, 75);
}

#[test]
fn test_recommendations_exclude_current_and_non_positive() {
    let matcher = Matcher::with_default_bonuses();
    let current = user("me", &["#hiking", "#coffee"]);
    let users = vec![
        current.clone(),
        user("match", &["#hiking"]),
        user("stranger", &["#movies"]),
    ];

    let recommendations = matcher.recommendations(Some(&current), &users);

    let ids: Vec<&str> = recommendations
        .iter()
        .map(|m| m.user.id.as_str())
        .collect();
    assert_eq!(ids, vec!["match"]);
}

#[test]
fn test_recommendations_sorted_descending() {
    let matcher = Matcher::with_default_bonuses();
    let mut current = user("me", &["#hiking", "#coffee"]);
    current.availability = vec![slot(2025, 3, 15, TimeSlot::Morning)];

    let mut best = user("best", &["#hiking", "#coffee"]);
    best.availability = vec![slot(2025, 3, 15, TimeSlot::Morning)];
    let users = vec![
        user("weak", &["#hiking", "#art", "#food"]),
        best,
        user("good", &["#hiking", "#coffee", "#yoga"]),
    ];

    let recommendations = matcher.recommendations(Some(&current), &users);

    assert_eq!(recommendations.len(), 3);
    for pair in recommendations.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert_eq!(recommendations[0].user.id, "best");
}

#[test]
fn test_recommendations_idempotent_for_unchanged_state() {
    let matcher = Matcher::with_default_bonuses();
    let current = user("me", &["#hiking", "#coffee"]);
    let users = vec![
        current.clone(),
        user("1", &["#hiking"]),
        user("2", &["#coffee", "#yoga"]),
        user("3", &["#hiking", "#coffee"]),
    ];

    let key = |recs: &[ScoredMatch]| -> Vec<(String, i32)> {
        recs.iter().map(|m| (m.user.id.clone(), m.score)).collect()
    };

    let first = matcher.recommendations(Some(&current), &users);
    let second = matcher.recommendations(Some(&current), &users);
    assert_eq!(key(&first), key(&second));
}
