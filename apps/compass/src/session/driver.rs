//! Session driver — runs one complete counseling interview.
//!
//! Flow: banner → ten validated rating prompts → rank profiles →
//! print the suggestion (or the no-match notice).

use std::io::{BufRead, Write};

use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::providers::describe;
use crate::catalog::Skill;
use crate::errors::AppError;
use crate::models::SkillRatings;
use crate::session::input::prompt_rating;
use crate::session::prompts::{
    NO_SUGGESTION_MESSAGE, RESULT_HEADER, SCALE_INSTRUCTIONS, WELCOME_BANNER,
};
use crate::suggestion::{rank_careers, suggest_from_ranked, Suggestion};

/// Outcome of one interview, returned to `main` for the closing log line.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub session_id: Uuid,
    pub career: Option<&'static str>,
    pub rationale: String,
}

/// Runs one full session over the given streams.
///
/// Steps:
/// 1. Print the welcome banner and rating instructions.
/// 2. Collect a validated rating for every skill, in `Skill::ALL` order.
/// 3. Rank the career profiles and pick the suggestion.
/// 4. Print the result block.
///
/// Generic over the streams so tests can drive it with in-memory buffers;
/// `main` passes locked stdin/stdout.
pub fn run_session<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<SessionSummary, AppError> {
    let session_id = Uuid::new_v4();
    info!("Session {session_id} started");

    // Step 1: banner
    writeln!(writer, "{WELCOME_BANNER}")?;
    writeln!(writer, "{SCALE_INSTRUCTIONS}")?;

    // Step 2: collect ratings (each prompt re-asks until the input is valid)
    let mut ratings = SkillRatings::new();
    for skill in Skill::ALL {
        let rating = prompt_rating(reader, writer, skill.prompt())?;
        ratings.insert(skill, rating);
    }
    info!("Session {session_id}: collected {} ratings", ratings.len());

    // Step 3: rank and pick
    let ranked = rank_careers(&ratings);
    for m in &ranked {
        debug!(
            "Session {session_id}: {} scored {:.2} over {} matched skills",
            m.career,
            m.average_score,
            m.matched_skills.len()
        );
    }
    let suggestion = suggest_from_ranked(&ranked);

    match suggestion.career {
        Some(career) => info!("Session {session_id}: suggesting {career}"),
        None => info!("Session {session_id}: no profile overlapped the rated skills"),
    }

    // Step 4: result block
    write_result_block(writer, &suggestion)?;

    Ok(SessionSummary {
        session_id,
        career: suggestion.career,
        rationale: suggestion.rationale,
    })
}

/// Prints the final outcome block: a blank separator line, then either the
/// suggestion with rationale and provider formats, or the no-match notice.
fn write_result_block<W: Write>(writer: &mut W, suggestion: &Suggestion) -> Result<(), AppError> {
    writeln!(writer)?;
    match suggestion.career {
        Some(career) => {
            writeln!(writer, "{RESULT_HEADER}")?;
            writeln!(writer, "Suggested Career: {career}")?;
            writeln!(writer, "Rationale: {}", suggestion.rationale)?;
            writeln!(writer, "Potential Provider Formats: {}", describe(career))?;
        }
        None => {
            writeln!(writer, "{NO_SUGGESTION_MESSAGE}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::scorer::NO_MATCH_MESSAGE;
    use std::io::Cursor;

    fn run_session_with(script: &str) -> (Result<SessionSummary, AppError>, String) {
        let mut reader = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = run_session(&mut reader, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_full_session_prints_banner_ten_prompts_and_result() {
        let script = "3\n".repeat(10);
        let (result, transcript) = run_session_with(&script);

        let summary = result.unwrap();
        assert_eq!(summary.career, Some("Software Engineer"));

        assert!(transcript.starts_with("Welcome to the AI Career Counselor!\n"));
        assert!(transcript.contains("scale of 1 to 5 (1: Low, 5: High):"));
        assert_eq!(transcript.matches("(1-5): ").count(), 10);
        assert!(transcript.contains("\nBased on your input:\n"));
        assert!(transcript.contains("Suggested Career: Software Engineer\n"));
        assert!(summary.rationale.contains("5.00"), "all-threes average");
    }

    #[test]
    fn test_session_result_block_matches_console_contract() {
        // Strong communication/patience/organization, everything else low.
        let script = "1\n1\n1\n1\n1\n5\n1\n1\n5\n4\n";
        let (result, transcript) = run_session_with(script);

        assert_eq!(result.unwrap().career, Some("Teacher"));
        assert!(transcript.contains("Suggested Career: Teacher\n"));
        assert!(transcript.contains(
            "Rationale: The suggested career 'Teacher' aligns well with your strengths in \
             communication, patience, organization with an average alignment score of 6.00.\n"
        ));
        assert!(transcript.contains(
            "Potential Provider Formats: Schools (public and private), universities, \
             online education platforms, tutoring services.\n"
        ));
    }

    #[test]
    fn test_session_recovers_from_rejected_input() {
        // First question: junk, out-of-range, then a valid 5.
        let script = "abc\n7\n5\n1\n1\n1\n1\n1\n1\n1\n1\n1\n";
        let (result, transcript) = run_session_with(script);

        let summary = result.unwrap();
        assert_eq!(summary.career, Some("Software Engineer"));
        assert!(summary.rationale.contains("3.67"));

        // 10 questions plus two re-prompts on the first one.
        assert_eq!(transcript.matches("(1-5): ").count(), 12);
        assert_eq!(
            transcript
                .matches("Invalid input. Please enter a number between 1 and 5.")
                .count(),
            1
        );
        assert_eq!(
            transcript
                .matches("Rating must be between 1 and 5. Please try again.")
                .count(),
            1
        );
    }

    #[test]
    fn test_eof_midway_through_interview_errors() {
        let (result, transcript) = run_session_with("3\n3\n");

        assert!(matches!(result, Err(AppError::InputClosed)));
        assert!(
            !transcript.contains("Based on your input:"),
            "no result block after an aborted interview"
        );
    }

    #[test]
    fn test_each_session_gets_its_own_id() {
        let script = "3\n".repeat(10);
        let (first, _) = run_session_with(&script);
        let (second, _) = run_session_with(&script);

        assert_ne!(first.unwrap().session_id, second.unwrap().session_id);
    }

    #[test]
    fn test_result_block_without_suggestion_prints_notice() {
        let suggestion = Suggestion {
            career: None,
            rationale: NO_MATCH_MESSAGE.to_string(),
        };

        let mut out = Vec::new();
        write_result_block(&mut out, &suggestion).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nNo suitable career could be suggested based on your input.\n"
        );
    }
}
