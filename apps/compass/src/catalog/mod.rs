// Static counseling vocabulary: the ten-skill rating scale, the six career
// requirement profiles, and the canned provider-format descriptions.
// Declaration order in the career table is authoritative for tie-breaks.

pub mod careers;
pub mod providers;
pub mod skills;

// Re-export the public API consumed by other modules (session driver).
pub use skills::Skill;
