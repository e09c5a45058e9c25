use std::io::Write;

use console::Term;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::error::AppError;
use crate::progress::SpinnerLog;
use crate::render::{content_width, render_json, render_view, LOADING_MESSAGE};
use crate::search::{SearchEngine, SearchOutcome};
use crate::session::{Session, View};
use crate::theme::Theme;

const PROMPT: &str = "› ";

const HELP: &str = "\
Type a description of the course you want and press Enter.

Commands:
  :theme   switch between the dark and light theme
  :help    show this message
  :quit    exit (also :q or Ctrl-D)";

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Search(&'a str),
    ToggleTheme,
    Help,
    Quit,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        let Some(name) = trimmed.strip_prefix(':') else {
            return Command::Search(line);
        };
        match name {
            "theme" => Command::ToggleTheme,
            "help" | "h" => Command::Help,
            "quit" | "q" => Command::Quit,
            _ => Command::Unknown(trimmed),
        }
    }
}

/// Interactive prompt. Each search completes before the next line is read.
pub async fn run_interactive(
    engine: &SearchEngine,
    spinners: &SpinnerLog,
    theme: Theme,
) -> Result<(), AppError> {
    let mut out = Term::stdout();
    let width = terminal_width(&out);
    let mut session = Session::new(theme);
    write_view(&mut out, &session, width)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let palette = session.theme().palette();
        out.write_str(&palette.primary.apply_to(PROMPT).to_string())?;
        let Some(line) = lines.next_line().await? else {
            out.write_line("")?;
            break;
        };

        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => out.write_line(HELP)?,
            Command::ToggleTheme => {
                let theme = session.toggle_theme();
                debug!(%theme, "theme toggled");
                out.write_line(&theme.palette().muted.apply_to(format!("theme: {theme}")).to_string())?;
                if session.view() != View::Landing {
                    write_view(&mut out, &session, width)?;
                }
            }
            Command::Unknown(name) => {
                out.write_line(&palette.muted.apply_to(format!("unknown command {name}, try :help")).to_string())?;
            }
            Command::Search(raw) => {
                let Some(query) = session.begin(raw) else {
                    continue;
                };
                let outcome = search_with_spinner(engine, spinners, &query).await;
                debug!(query = %query, fallback = outcome.is_fallback(), "search finished");
                session.finish(outcome.into_courses());
                write_view(&mut out, &session, width)?;
            }
        }
    }
    Ok(())
}

/// Runs a single search and writes the result to `out`. A blank query
/// writes nothing.
pub async fn run_once(
    engine: &SearchEngine,
    spinners: &SpinnerLog,
    theme: Theme,
    query: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let mut session = Session::new(theme);
    let Some(query) = session.begin(query) else {
        return Ok(());
    };

    let outcome = search_with_spinner(engine, spinners, &query).await;
    session.finish(outcome.into_courses());

    if json {
        writeln!(out, "{}", render_json(session.courses())?)?;
    } else {
        write_view(out, &session, terminal_width(&Term::stdout()))?;
    }
    Ok(())
}

fn terminal_width(term: &Term) -> usize {
    let (_, cols) = term.size();
    content_width(cols as usize)
}

fn write_view(out: &mut impl Write, session: &Session, width: usize) -> Result<(), AppError> {
    writeln!(out, "{}\n", render_view(session, width))?;
    Ok(())
}

async fn search_with_spinner(
    engine: &SearchEngine,
    spinners: &SpinnerLog,
    query: &str,
) -> SearchOutcome {
    let _spinner = spinners.start(LOADING_MESSAGE);
    engine.search(query).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use tokio::net::TcpListener;

    use course_common::mock::MOCK_COURSE_COUNT;
    use course_common::search_api::{SearchApiClient, SearchApiConfig};

    use super::*;
    use crate::render::LINK_LABEL;

    fn engine_for(endpoint: String) -> SearchEngine {
        let client = SearchApiClient::new(SearchApiConfig {
            endpoint,
            timeout: Duration::from_secs(5),
            ..SearchApiConfig::default()
        })
        .unwrap();
        SearchEngine::new(Arc::new(client), Duration::ZERO)
    }

    async fn unreachable_engine() -> SearchEngine {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        engine_for(format!("http://{addr}/search"))
    }

    #[test]
    fn test_plain_lines_are_searches() {
        assert_eq!(Command::parse("beginner python"), Command::Search("beginner python"));
        assert_eq!(Command::parse("   "), Command::Search("   "));
    }

    #[test]
    fn test_colon_commands() {
        assert_eq!(Command::parse(":theme"), Command::ToggleTheme);
        assert_eq!(Command::parse("  :q "), Command::Quit);
        assert_eq!(Command::parse(":quit"), Command::Quit);
        assert_eq!(Command::parse(":help"), Command::Help);
        assert_eq!(Command::parse(":nope"), Command::Unknown(":nope"));
    }

    #[tokio::test]
    async fn test_one_shot_blank_query_writes_nothing() {
        let engine = unreachable_engine().await;
        let mut out = Vec::new();
        run_once(&engine, &SpinnerLog::default(), Theme::Dark, "   ", false, &mut out)
            .await
            .unwrap();
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_one_shot_json_prints_wire_array() {
        let router = Router::new().route(
            "/search",
            get(|| async {
                Json(json!([{
                    "title": "Rust in Action",
                    "rating": 4.9,
                    "num_reviews": 10,
                    "is_paid": true,
                    "url": "https://example.com/rust"
                }]))
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        let engine = engine_for(format!("http://{addr}/search"));

        let mut out = Vec::new();
        run_once(&engine, &SpinnerLog::default(), Theme::Dark, "rust", true, &mut out)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let courses = value.as_array().unwrap();
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0]["title"], "Rust in Action");
        assert_eq!(courses[0]["num_reviews"], 10);
    }

    #[tokio::test]
    async fn test_one_shot_cards_show_mock_courses_on_failure() {
        let engine = unreachable_engine().await;
        let mut out = Vec::new();
        run_once(&engine, &SpinnerLog::default(), Theme::Light, "python", false, &mut out)
            .await
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let plain = console::strip_ansi_codes(&text);
        assert_eq!(plain.matches(LINK_LABEL).count(), MOCK_COURSE_COUNT);
    }
}
