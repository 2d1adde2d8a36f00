#![allow(dead_code)]

use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::skills::Skill;
use crate::models::rating::Rating;

/// The ratings collected over one session.
///
/// At most one rating per skill; inserting again replaces the earlier value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SkillRatings {
    entries: HashMap<Skill, Rating>,
}

impl SkillRatings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, skill: Skill, rating: Rating) {
        self.entries.insert(skill, rating);
    }

    pub fn get(&self, skill: Skill) -> Option<Rating> {
        self.entries.get(&skill).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Skill, Rating)> for SkillRatings {
    fn from_iter<I: IntoIterator<Item = (Skill, Rating)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
