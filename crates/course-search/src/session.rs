use course_common::course::Course;

use crate::theme::Theme;

/// What the screen should show for the current session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Nothing searched yet; the banner is shown above the prompt.
    Landing,
    Loading,
    Empty,
    Results,
}

/// Interactive state for one run of the client.
///
/// Searches are driven in two steps: [`Session::begin`] accepts a submitted
/// line and marks the session busy, [`Session::finish`] stores the results.
#[derive(Debug, Default)]
pub struct Session {
    courses: Vec<Course>,
    loading: bool,
    has_searched: bool,
    theme: Theme,
}

impl Session {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    /// Returns the trimmed query to send, or `None` when the line is blank or
    /// a search is already in flight. Previous results are cleared.
    pub fn begin(&mut self, raw: &str) -> Option<String> {
        let query = raw.trim();
        if query.is_empty() || self.loading {
            return None;
        }
        self.loading = true;
        self.has_searched = true;
        self.courses.clear();
        Some(query.to_string())
    }

    pub fn finish(&mut self, courses: Vec<Course>) {
        self.courses = courses;
        self.loading = false;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn view(&self) -> View {
        if !self.has_searched {
            View::Landing
        } else if self.loading {
            View::Loading
        } else if self.courses.is_empty() {
            View::Empty
        } else {
            View::Results
        }
    }
}
