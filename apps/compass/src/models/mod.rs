// Session data model: the validated 1-5 rating value and the per-session
// skill → rating collection the scorer consumes.

pub mod rating;
pub mod ratings;

// Re-export the public API consumed by other modules (session, suggestion).
pub use rating::Rating;
pub use ratings::SkillRatings;
