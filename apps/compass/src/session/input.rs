use std::io::{BufRead, Write};

use tracing::debug;

use crate::errors::AppError;
use crate::models::Rating;
use crate::session::prompts::{INVALID_NUMBER_MESSAGE, OUT_OF_RANGE_MESSAGE};

/// Prompts until the reader yields a valid 1-5 rating.
///
/// Writes `"<question> (1-5): "` without a trailing newline and flushes, then
/// reads a line. Non-numeric input and out-of-range numbers each print their
/// correction message and ask again; only a valid rating, EOF, or an I/O
/// failure leaves the loop.
pub fn prompt_rating<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
) -> Result<Rating, AppError> {
    loop {
        write!(writer, "{question} (1-5): ")?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }

        let trimmed = line.trim();
        let value: i64 = match trimmed.parse() {
            Ok(v) => v,
            Err(_) => {
                debug!("Rejected rating input {trimmed:?}: not a number");
                writeln!(writer, "{INVALID_NUMBER_MESSAGE}")?;
                continue;
            }
        };

        match Rating::new(value) {
            Ok(rating) => return Ok(rating),
            Err(_) => {
                debug!("Rejected rating input {value}: outside the 1-5 scale");
                writeln!(writer, "{OUT_OF_RANGE_MESSAGE}")?;
            }
        }
    }
}
