// Rule-based career suggestion.
// Ranks the static profiles against collected ratings and explains the winner.

pub mod scorer;

// Re-export the public API consumed by other modules (session driver).
pub use scorer::{rank_careers, suggest_from_ranked, Suggestion};
