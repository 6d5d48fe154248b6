//! Dashboard widgets.
//!
//! Every widget fetches its own data and resolves to exactly one
//! [`WidgetState`]. Widgets never share state with each other; a failure in
//! one only affects its own panel.

pub mod budgets;
pub mod market;
pub mod notifications;
pub mod portfolio;
pub mod suggestion;
pub mod summary;
pub mod transactions;

use chrono::NaiveDateTime;

use crate::errors::DashboardError;

/// Width of text progress bars, in cells.
pub const BAR_WIDTH: usize = 20;

/// The four mutually exclusive UI states of a widget.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetState<T> {
    /// Fetch not finished yet; renders a skeleton.
    Loading,
    /// Fetch failed; carries the banner text.
    Failed(String),
    /// Fetch succeeded with nothing to show.
    Empty,
    /// Fetch succeeded with data.
    Ready(T),
}

impl<T> Default for WidgetState<T> {
    fn default() -> Self {
        WidgetState::Loading
    }
}

impl<T> WidgetState<T> {
    /// Resolve a fetch outcome. `is_empty` decides between `Empty` and `Ready`;
    /// `on_error` turns the error into banner text.
    pub fn resolve(
        result: Result<T, DashboardError>,
        is_empty: impl FnOnce(&T) -> bool,
        on_error: impl FnOnce(&DashboardError) -> String,
    ) -> Self {
        match result {
            Ok(value) if is_empty(&value) => WidgetState::Empty,
            Ok(value) => WidgetState::Ready(value),
            Err(e) => WidgetState::Failed(on_error(&e)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, WidgetState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, WidgetState::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            WidgetState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            WidgetState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WidgetState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Inputs every renderer needs besides its own state.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Currency for amounts the backend does not tag.
    pub currency: String,
    /// Reference time for relative timestamps.
    pub now: NaiveDateTime,
}

impl RenderContext {
    pub fn new(currency: impl Into<String>, now: NaiveDateTime) -> Self {
        Self {
            currency: currency.into(),
            now,
        }
    }
}

/// A panel on the dashboard.
pub trait Widget {
    fn title(&self) -> &str;

    /// Body lines for the current state, without the title.
    fn render(&self, ctx: &RenderContext) -> Vec<String>;
}

// ── Shared rendering helpers ────────────────────────────────────────

pub(crate) fn skeleton(rows: usize) -> Vec<String> {
    (0..rows)
        .map(|i| "░".repeat(if i % 2 == 0 { 24 } else { 16 }))
        .collect()
}

pub(crate) fn banner(message: &str) -> Vec<String> {
    vec![format!("✖ {message}")]
}

/// Text progress bar for a percentage, capped at full width.
pub fn progress_bar(percentage: f64) -> String {
    let pct = if percentage.is_nan() {
        0.0
    } else {
        percentage.clamp(0.0, 100.0)
    };
    let filled = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_is_capped() {
        assert_eq!(progress_bar(250.0), "█".repeat(BAR_WIDTH));
        assert_eq!(progress_bar(-5.0), "░".repeat(BAR_WIDTH));
    }

    #[test]
    fn progress_bar_half() {
        let bar = progress_bar(50.0);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), BAR_WIDTH / 2);
    }

    #[test]
    fn resolve_prefers_error_text() {
        let state: WidgetState<Vec<u8>> = WidgetState::resolve(
            Err(DashboardError::NotAuthenticated),
            Vec::is_empty,
            |e| format!("Error loading things: {e}"),
        );
        assert_eq!(state.error(), Some("Error loading things: Not authenticated"));
    }
}
