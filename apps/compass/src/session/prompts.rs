// Console copy for the interactive session.
// Every fixed user-visible line outside rationales and provider formats
// lives here; per-skill questions live on `Skill::prompt()`.

pub const WELCOME_BANNER: &str = "Welcome to the AI Career Counselor!";

pub const SCALE_INSTRUCTIONS: &str =
    "Please rate the following skills/interests on a scale of 1 to 5 (1: Low, 5: High):";

pub const INVALID_NUMBER_MESSAGE: &str = "Invalid input. Please enter a number between 1 and 5.";

pub const OUT_OF_RANGE_MESSAGE: &str = "Rating must be between 1 and 5. Please try again.";

pub const RESULT_HEADER: &str = "Based on your input:";

pub const NO_SUGGESTION_MESSAGE: &str =
    "No suitable career could be suggested based on your input.";
