#![allow(dead_code)]

//! Static career requirement profiles.
//!
//! Declaration order is authoritative: the scorer walks this table in order
//! and resolves tied averages to the earlier profile. Requirement levels sit
//! on the same 1-5 scale the user answers on.

use crate::catalog::skills::Skill;

/// A career and its requirement vector of `(skill, desired level)` pairs.
#[derive(Debug, Clone, Copy)]
pub struct CareerProfile {
    pub name: &'static str,
    pub requirements: &'static [(Skill, u8)],
}

pub const CAREER_PROFILES: &[CareerProfile] = &[
    CareerProfile {
        name: "Software Engineer",
        requirements: &[
            (Skill::TechnicalAptitude, 4),
            (Skill::ProblemSolving, 5),
            (Skill::Creativity, 3),
        ],
    },
    CareerProfile {
        name: "Data Scientist",
        requirements: &[
            (Skill::AnalyticalSkills, 5),
            (Skill::MathematicalAbility, 4),
            (Skill::Communication, 3),
        ],
    },
    CareerProfile {
        name: "Marketing Manager",
        requirements: &[
            (Skill::Communication, 5),
            (Skill::Creativity, 4),
            (Skill::AnalyticalSkills, 3),
        ],
    },
    CareerProfile {
        name: "Financial Analyst",
        requirements: &[
            (Skill::MathematicalAbility, 5),
            (Skill::AnalyticalSkills, 4),
            (Skill::AttentionToDetail, 4),
        ],
    },
    CareerProfile {
        name: "UX Designer",
        requirements: &[
            (Skill::Creativity, 5),
            (Skill::Empathy, 4),
            (Skill::TechnicalAptitude, 3),
        ],
    },
    CareerProfile {
        name: "Teacher",
        requirements: &[
            (Skill::Communication, 5),
            (Skill::Patience, 5),
            (Skill::Organization, 4),
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rating;
    use std::collections::HashSet;

    #[test]
    fn test_table_order_is_authoritative() {
        let names: Vec<&str> = CAREER_PROFILES.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            [
                "Software Engineer",
                "Data Scientist",
                "Marketing Manager",
                "Financial Analyst",
                "UX Designer",
                "Teacher",
            ]
        );
    }

    #[test]
    fn test_every_requirement_level_is_a_valid_rating() {
        for profile in CAREER_PROFILES {
            for &(skill, level) in profile.requirements {
                assert!(
                    Rating::new(i64::from(level)).is_ok(),
                    "{}: level {level} for {skill} is off the 1-5 scale",
                    profile.name
                );
            }
        }
    }

    #[test]
    fn test_no_profile_repeats_a_skill() {
        for profile in CAREER_PROFILES {
            let unique: HashSet<Skill> =
                profile.requirements.iter().map(|&(skill, _)| skill).collect();
            assert_eq!(
                unique.len(),
                profile.requirements.len(),
                "{} lists a skill twice",
                profile.name
            );
        }
    }

    #[test]
    fn test_every_profile_has_requirements() {
        for profile in CAREER_PROFILES {
            assert!(
                !profile.requirements.is_empty(),
                "{} has no requirements",
                profile.name
            );
        }
    }
}
