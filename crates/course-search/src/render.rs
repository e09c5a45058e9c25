//! Text rendering for the terminal client.
//!
//! Each course becomes a card: a coloured accent bar down the left edge, the
//! price tag and review count, the title clamped to two lines, the rating with
//! five star slots and the outbound link. Cards are stacked vertically; nothing
//! is right-aligned, so long URLs stay intact and clickable.
//!
//! All styling goes through the [`Palette`] of the active theme.

use std::array;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use course_common::course::Course;

use crate::session::{Session, View};
use crate::theme::Palette;

pub const BANNER: &str = "Find Your Next Course";
pub const PLACEHOLDER: &str = "Describe the course you want to learn (e.g. beginner python)...";
pub const LOADING_MESSAGE: &str = "Searching...";
pub const EMPTY_MESSAGE: &str = "No courses found. Try a different query.";
pub const LINK_LABEL: &str = "Go to Course";

pub const TITLE_LINES: usize = 2;
pub const STAR_SLOTS: usize = 5;

const ACCENT_BAR: &str = "▌";
const MIN_WIDTH: usize = 20;
const MAX_WIDTH: usize = 96;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    pub fn glyph(self) -> char {
        match self {
            Star::Full => '★',
            Star::Half => '½',
            Star::Empty => '☆',
        }
    }
}

/// `floor(rating)` full stars, then a half star when the fraction is at least
/// one half. Out-of-range ratings saturate.
pub fn star_slots(rating: f64) -> [Star; STAR_SLOTS] {
    let full = rating.floor().clamp(0.0, STAR_SLOTS as f64) as usize;
    let has_half = rating.fract() >= 0.5;
    array::from_fn(|i| {
        if i < full {
            Star::Full
        } else if i == full && has_half {
            Star::Half
        } else {
            Star::Empty
        }
    })
}

pub fn format_reviews(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn price_tag(is_paid: bool) -> &'static str {
    if is_paid {
        "PAID"
    } else {
        "FREE"
    }
}

/// Usable card width for a terminal that is `term_cols` columns wide.
pub fn content_width(term_cols: usize) -> usize {
    term_cols.saturating_sub(ACCENT_BAR.width() + 1).clamp(MIN_WIDTH, MAX_WIDTH)
}

/// Word-wraps `title` to `width` display columns and keeps at most
/// `max_lines` lines. A clamped title ends with an ellipsis.
pub fn clamp_title(title: &str, width: usize, max_lines: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in title.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }
        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        // Words wider than a line are split at character boundaries.
        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width > 0 && current_width + ch_width > width {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            *last = with_ellipsis(last, width);
        }
    }
    lines
}

fn with_ellipsis(line: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in line.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width + 1 > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    let mut out = out.trim_end().to_string();
    out.push('…');
    out
}

pub fn render_card(course: &Course, palette: &Palette, width: usize) -> String {
    let bar = palette.primary.apply_to(ACCENT_BAR).to_string();
    let mut lines = Vec::new();

    let tag_style = if course.is_paid {
        &palette.paid
    } else {
        &palette.free
    };
    lines.push(format!(
        "{} {}",
        tag_style.apply_to(price_tag(course.is_paid)),
        palette
            .muted
            .apply_to(format!("· {} reviews", format_reviews(course.num_reviews)))
    ));

    for line in clamp_title(&course.title, width, TITLE_LINES) {
        lines.push(palette.text.clone().bold().apply_to(line).to_string());
    }

    let stars: String = star_slots(course.rating)
        .iter()
        .map(|star| {
            let style = match star {
                Star::Empty => &palette.muted,
                Star::Full | Star::Half => &palette.accent,
            };
            style.apply_to(star.glyph()).to_string()
        })
        .collect();
    lines.push(format!(
        "{} {}",
        palette.accent.clone().bold().apply_to(format!("{:.1}", course.rating)),
        stars
    ));

    lines.push(format!(
        "{} {}",
        palette.secondary.apply_to(format!("{LINK_LABEL} ↗")),
        palette.secondary.clone().underlined().apply_to(&course.url)
    ));

    lines
        .into_iter()
        .map(|line| format!("{bar} {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_view(session: &Session, width: usize) -> String {
    let palette = session.theme().palette();
    match session.view() {
        View::Landing => format!(
            "{}\n{}",
            palette.primary.apply_to(BANNER),
            palette.muted.apply_to(PLACEHOLDER)
        ),
        View::Loading => palette.muted.apply_to(LOADING_MESSAGE).to_string(),
        View::Empty => palette.muted.apply_to(EMPTY_MESSAGE).to_string(),
        View::Results => session
            .courses()
            .iter()
            .map(|course| render_card(course, &palette, width))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

pub fn render_json(courses: &[Course]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(courses)
}

#[cfg(test)]
mod tests {
    use console::strip_ansi_codes;
    use course_common::mock::mock_courses;

    use super::*;
    use crate::theme::Theme;

    fn glyphs(rating: f64) -> String {
        star_slots(rating).iter().map(|s| s.glyph()).collect()
    }

    #[test]
    fn test_star_slots() {
        assert_eq!(glyphs(4.6), "★★★★½");
        assert_eq!(glyphs(4.4), "★★★★☆");
        assert_eq!(glyphs(4.5), "★★★★½");
        assert_eq!(glyphs(0.0), "☆☆☆☆☆");
        assert_eq!(glyphs(5.0), "★★★★★");
    }

    #[test]
    fn test_star_slots_saturate_out_of_range() {
        assert_eq!(glyphs(7.3), "★★★★★");
        assert_eq!(glyphs(-1.5), "☆☆☆☆☆");
    }

    #[test]
    fn test_format_reviews() {
        assert_eq!(format_reviews(0), "0");
        assert_eq!(format_reviews(999), "999");
        assert_eq!(format_reviews(1000), "1,000");
        assert_eq!(format_reviews(450_000), "450,000");
        assert_eq!(format_reviews(1_234_567), "1,234,567");
    }

    #[test]
    fn test_clamp_title_fits() {
        assert_eq!(
            clamp_title("The Web Developer Bootcamp 2024", 40, 2),
            vec!["The Web Developer Bootcamp 2024"]
        );
    }

    #[test]
    fn test_clamp_title_wraps_and_clamps() {
        let lines = clamp_title(
            "React - The Complete Guide (incl Hooks, React Router, Redux)",
            20,
            2,
        );
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "React - The Complete");
        assert!(lines[1].ends_with('…'));
        assert!(lines.iter().all(|l| l.width() <= 20));
    }

    #[test]
    fn test_clamp_title_splits_long_words() {
        let lines = clamp_title("abcdefghij", 4, 5);
        assert_eq!(lines, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_content_width_bounds() {
        assert_eq!(content_width(0), MIN_WIDTH);
        assert_eq!(content_width(80), 78);
        assert_eq!(content_width(400), MAX_WIDTH);
    }

    #[test]
    fn test_render_card_contents() {
        let course = &mock_courses()[2];
        let card = render_card(course, &Theme::Dark.palette(), 60);
        let plain = strip_ansi_codes(&card);
        let lines: Vec<&str> = plain.lines().collect();

        assert_eq!(lines[0], "▌ FREE · 120,000 reviews");
        assert!(lines.iter().all(|l| l.starts_with("▌ ")));
        assert!(plain.contains("4.7 ★★★★½"));
        assert!(plain.contains(&format!("{LINK_LABEL} ↗ {}", course.url)));
    }

    #[test]
    fn test_render_view_states() {
        let mut session = Session::new(Theme::Light);
        assert!(strip_ansi_codes(&render_view(&session, 60)).contains(BANNER));

        session.begin("python");
        assert_eq!(strip_ansi_codes(&render_view(&session, 60)), LOADING_MESSAGE);

        session.finish(Vec::new());
        assert_eq!(strip_ansi_codes(&render_view(&session, 60)), EMPTY_MESSAGE);

        session.begin("python");
        session.finish(mock_courses());
        let plain = strip_ansi_codes(&render_view(&session, 80)).to_string();
        assert_eq!(plain.matches(LINK_LABEL).count(), 6);
        assert!(!plain.contains(BANNER));
    }

    #[test]
    fn test_render_json_uses_wire_shape() {
        let json = render_json(&mock_courses()[..1]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["num_reviews"], 450_000);
        assert_eq!(value[0]["is_paid"], true);
    }
}
