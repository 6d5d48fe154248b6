use crate::backend::traits::DashboardBackend;

use super::{banner, skeleton, RenderContext, Widget, WidgetState};

pub const TITLE: &str = "AI Suggestion";
pub const EMPTY_MESSAGE: &str = "No suggestion available right now.";
pub const ERROR_MESSAGE: &str = "Unable to load AI suggestion. Please try again.";

/// Shows the latest AI-generated saving tip.
#[derive(Debug, Clone, Default)]
pub struct AiSuggestion {
    state: WidgetState<String>,
}

impl AiSuggestion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WidgetState<String> {
        &self.state
    }

    pub async fn load(&mut self, backend: &dyn DashboardBackend) {
        self.state = WidgetState::Loading;
        let result = backend.ai_suggestion().await.map(|s| s.trim().to_string());
        self.state = WidgetState::resolve(result, String::is_empty, |e| {
            tracing::error!(error = %e, "error fetching AI suggestion");
            ERROR_MESSAGE.to_string()
        });
    }
}

impl Widget for AiSuggestion {
    fn title(&self) -> &str {
        TITLE
    }

    fn render(&self, _ctx: &RenderContext) -> Vec<String> {
        match &self.state {
            WidgetState::Loading => skeleton(2),
            WidgetState::Failed(msg) => banner(msg),
            WidgetState::Empty => vec![EMPTY_MESSAGE.to_string()],
            WidgetState::Ready(text) => text.lines().map(str::to_string).collect(),
        }
    }
}
