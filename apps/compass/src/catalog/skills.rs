#![allow(dead_code)]

//! The ten-skill self-rating vocabulary.
//!
//! `Skill::ALL` fixes the interview order. `key()` is the stable snake_case
//! identifier used in rationales and logs (and matches the serde
//! representation); `prompt()` is the console question for the skill.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    TechnicalAptitude,
    ProblemSolving,
    Creativity,
    AnalyticalSkills,
    MathematicalAbility,
    Communication,
    AttentionToDetail,
    Empathy,
    Patience,
    Organization,
}

impl Skill {
    /// The interview order: prompts are asked in exactly this sequence.
    pub const ALL: [Skill; 10] = [
        Skill::TechnicalAptitude,
        Skill::ProblemSolving,
        Skill::Creativity,
        Skill::AnalyticalSkills,
        Skill::MathematicalAbility,
        Skill::Communication,
        Skill::AttentionToDetail,
        Skill::Empathy,
        Skill::Patience,
        Skill::Organization,
    ];

    /// Stable snake_case identifier.
    pub fn key(self) -> &'static str {
        match self {
            Skill::TechnicalAptitude => "technical_aptitude",
            Skill::ProblemSolving => "problem_solving",
            Skill::Creativity => "creativity",
            Skill::AnalyticalSkills => "analytical_skills",
            Skill::MathematicalAbility => "mathematical_ability",
            Skill::Communication => "communication",
            Skill::AttentionToDetail => "attention_to_detail",
            Skill::Empathy => "empathy",
            Skill::Patience => "patience",
            Skill::Organization => "organization",
        }
    }

    /// The question shown when asking for this skill's rating.
    pub fn prompt(self) -> &'static str {
        match self {
            Skill::TechnicalAptitude => "Your interest in technology and how things work?",
            Skill::ProblemSolving => "Your ability to analyze and solve complex issues?",
            Skill::Creativity => "Your inclination towards innovation and generating new ideas?",
            Skill::AnalyticalSkills => "Your ability to interpret data and draw conclusions?",
            Skill::MathematicalAbility => {
                "Your comfort and proficiency with numbers and calculations?"
            }
            Skill::Communication => "Your skill in expressing ideas clearly and effectively?",
            Skill::AttentionToDetail => "Your focus on accuracy and thoroughness?",
            Skill::Empathy => "Your ability to understand and share the feelings of others?",
            Skill::Patience => {
                "Your capacity to remain calm and understanding in challenging situations?"
            }
            Skill::Organization => "Your ability to structure and manage tasks effectively?",
        }
    }
}

impl std::fmt::Display for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
