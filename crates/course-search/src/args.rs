use clap::Parser;

use crate::theme::Theme;

/// Find courses from the terminal.
///
/// Without a query, starts an interactive prompt. With one, runs a single
/// search and prints the results.
#[derive(Debug, Parser)]
#[command(name = "course-search", version)]
pub struct Cli {
    /// Natural-language description of the course you want
    #[arg(value_name = "QUERY")]
    pub query: Vec<String>,

    /// Search endpoint URL (overrides COURSE_SEARCH_ENDPOINT)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// HTTP timeout in seconds (overrides COURSE_SEARCH_TIMEOUT_SECS)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Colour theme (overrides COURSE_SEARCH_THEME)
    #[arg(long, value_name = "dark|light")]
    pub theme: Option<Theme>,

    /// Print results as a JSON array instead of cards
    #[arg(long, requires = "query")]
    pub json: bool,
}

impl Cli {
    /// The positional words joined back into one query, if any were given.
    pub fn one_shot_query(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}
