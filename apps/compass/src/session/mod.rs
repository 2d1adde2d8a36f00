// Interactive console session: the canned console copy, the validated
// rating prompt loop, and the driver that runs one full interview.

pub mod driver;
pub mod input;
pub mod prompts;

// Re-export the public API consumed by main.
pub use driver::{run_session, SessionSummary};
