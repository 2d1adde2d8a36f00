#![allow(dead_code)]

//! Canned provider-format descriptions — where each career is practiced.

/// Fallback for careers with no provider-format entry.
pub const UNKNOWN_PROVIDER_FORMAT: &str =
    "Information on provider formats for this career is not currently available.";

/// Returns the provider-format description for a career name.
///
/// Exact-match lookup; anything outside the known set gets the fallback.
pub fn describe(career: &str) -> &'static str {
    match career {
        "Software Engineer" => {
            "Technology companies (startups, large corporations), freelance platforms, open-source projects."
        }
        "Data Scientist" => {
            "Tech companies, research institutions, consulting firms, financial organizations, healthcare."
        }
        "Marketing Manager" => {
            "Companies across various industries, advertising agencies, marketing firms, non-profit organizations."
        }
        "Financial Analyst" => {
            "Investment banks, hedge funds, financial consulting firms, corporate finance departments."
        }
        "UX Designer" => "Technology companies, design agencies, freelance, startups.",
        "Teacher" => {
            "Schools (public and private), universities, online education platforms, tutoring services."
        }
        _ => UNKNOWN_PROVIDER_FORMAT,
    }
}
