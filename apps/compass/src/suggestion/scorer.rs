#![allow(dead_code)]

//! Career scoring — ranks the static profiles against a user's ratings.
//!
//! Pure and deterministic. Per-skill closeness is `6 - |rating - level|`
//! (2..=6 on the 1-5 scale); a profile's score averages closeness over the
//! skills the user actually rated. Tied averages resolve to the profile
//! declared first in `CAREER_PROFILES`.

use serde::Serialize;

use crate::catalog::careers::{CareerProfile, CAREER_PROFILES};
use crate::models::SkillRatings;

/// Rationale text when no profile overlaps the rated skills.
pub const NO_MATCH_MESSAGE: &str = "No suitable career found based on the input.";

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// One scored profile: the matched skills (in profile order) and the average
/// closeness over exactly those skills.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerMatch {
    pub career: &'static str,
    pub matched_skills: Vec<&'static str>,
    pub average_score: f64,
}

/// Result of a suggestion run. `career` is `None` when nothing overlapped,
/// with `rationale` carrying `NO_MATCH_MESSAGE`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub career: Option<&'static str>,
    pub rationale: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Ranking
// ────────────────────────────────────────────────────────────────────────────

/// Scores every profile with at least one rated skill, in declaration order.
pub fn rank_careers(ratings: &SkillRatings) -> Vec<CareerMatch> {
    CAREER_PROFILES
        .iter()
        .filter_map(|profile| score_profile(profile, ratings))
        .collect()
}

/// Scores one profile over the skills the user rated, or `None` if the
/// profile shares no skill with the input.
fn score_profile(profile: &CareerProfile, ratings: &SkillRatings) -> Option<CareerMatch> {
    let mut matched_skills = Vec::new();
    let mut total = 0.0_f64;

    for &(skill, level) in profile.requirements {
        let Some(rating) = ratings.get(skill) else {
            continue;
        };
        let diff = (rating.value() as i16 - level as i16).abs();
        total += (6 - diff) as f64;
        matched_skills.push(skill.key());
    }

    if matched_skills.is_empty() {
        return None;
    }

    let average_score = total / matched_skills.len() as f64;
    Some(CareerMatch {
        career: profile.name,
        matched_skills,
        average_score,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Suggestion
// ────────────────────────────────────────────────────────────────────────────

/// Ranks all profiles and picks the suggestion in one call.
pub fn suggest(ratings: &SkillRatings) -> Suggestion {
    suggest_from_ranked(&rank_careers(ratings))
}

/// Picks the winner from an already-computed ranking.
///
/// Only a strictly greater average replaces the incumbent, so an equal later
/// average keeps the earlier profile.
pub fn suggest_from_ranked(ranked: &[CareerMatch]) -> Suggestion {
    let mut best: Option<&CareerMatch> = None;
    for candidate in ranked {
        if best.map_or(true, |b| candidate.average_score > b.average_score) {
            best = Some(candidate);
        }
    }

    match best {
        Some(winner) => Suggestion {
            career: Some(winner.career),
            rationale: build_rationale(winner),
        },
        None => Suggestion {
            career: None,
            rationale: NO_MATCH_MESSAGE.to_string(),
        },
    }
}

/// Builds the human-readable explanation for the winning profile.
fn build_rationale(winner: &CareerMatch) -> String {
    format!(
        "The suggested career '{}' aligns well with your strengths in {} with an average alignment score of {:.2}.",
        winner.career,
        winner.matched_skills.join(", "),
        winner.average_score
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
