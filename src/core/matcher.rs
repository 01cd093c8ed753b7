use crate::core::scoring::compute_match_score;
use crate::models::{ScoredMatch, SlotBonuses, User};

/// Ranks candidates for the current user
///
/// Scoring is pure and reads nothing but the two profiles; the matcher only
/// carries the configured bonus weights.
#[derive(Debug, Clone)]
pub struct Matcher {
    bonuses: SlotBonuses,
}

impl Matcher {
    pub fn new(bonuses: SlotBonuses) -> Self {
        Self { bonuses }
    }

    pub fn with_default_bonuses() -> Self {
        Self {
            bonuses: SlotBonuses::default(),
        }
    }

    /// Score one candidate. A missing reference (nobody logged in) scores 0.
    pub fn score(&self, candidate: &User, reference: Option<&User>) -> i32 {
        reference.map_or(0, |r| compute_match_score(candidate, r, &self.bonuses))
    }

    /// Rank everyone except the current user, dropping non-positive scores.
    ///
    /// Returns an owned snapshot sorted descending by score; ties keep the
    /// input order (stable sort). Empty when there is no current user.
    pub fn recommendations(&self, current: Option<&User>, users: &[User]) -> Vec<ScoredMatch> {
        let Some(current) = current else {
            return Vec::new();
        };

        let mut matches: Vec<ScoredMatch> = users
            .iter()
            .filter(|u| u.id != current.id)
            .map(|u| ScoredMatch {
                score: compute_match_score(u, current, &self.bonuses),
                user: u.clone(),
            })
            .filter(|m| m.score > 0)
            .collect();

        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_bonuses()
    }
}
