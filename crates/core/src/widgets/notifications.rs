use crate::backend::traits::DashboardBackend;
use crate::formatters::{relative_time_str, truncate_text, DEFAULT_TRUNCATE_LEN};
use crate::models::notification::Notification;

use super::{banner, RenderContext, Widget, WidgetState};

pub const TITLE: &str = "Notifications";
pub const EMPTY_MESSAGE: &str = "No notifications";
pub const LOADING_MESSAGE: &str = "Loading notifications...";

/// Bell with an unread badge and a dropdown list.
///
/// Read/unread bookkeeping is local; the unread count is always derived
/// from the list so it cannot drift.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    open: bool,
    state: WidgetState<Vec<Notification>>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WidgetState<Vec<Notification>> {
        &self.state
    }

    pub async fn load(&mut self, backend: &dyn DashboardBackend) {
        self.state = WidgetState::Loading;
        self.state = WidgetState::resolve(backend.notifications().await, Vec::is_empty, |e| {
            tracing::error!(error = %e, "error fetching notifications");
            e.to_string()
        });
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn unread_count(&self) -> usize {
        self.state
            .ready()
            .map_or(0, |list| list.iter().filter(|n| !n.read).count())
    }

    /// Mark one notification read. Returns `true` if it was unread before.
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        let Some(list) = self.state.ready_mut() else {
            return false;
        };
        match list.iter_mut().find(|n| n.id == id) {
            Some(n) if !n.read => {
                n.read = true;
                true
            }
            _ => false,
        }
    }

    /// Mark everything read. Returns how many changed.
    pub fn mark_all_as_read(&mut self) -> usize {
        let Some(list) = self.state.ready_mut() else {
            return 0;
        };
        let mut changed = 0;
        for n in list.iter_mut().filter(|n| !n.read) {
            n.read = true;
            changed += 1;
        }
        changed
    }
}

impl Widget for NotificationCenter {
    fn title(&self) -> &str {
        TITLE
    }

    fn render(&self, ctx: &RenderContext) -> Vec<String> {
        let unread = self.unread_count();
        let bell = if unread > 0 {
            format!("🔔 {unread} unread")
        } else {
            "🔔".to_string()
        };
        if !self.open {
            return vec![bell];
        }

        let mut lines = vec![bell];
        match &self.state {
            WidgetState::Loading => lines.push(LOADING_MESSAGE.to_string()),
            WidgetState::Failed(msg) => lines.extend(banner(msg)),
            WidgetState::Empty => lines.push(EMPTY_MESSAGE.to_string()),
            WidgetState::Ready(list) => {
                for n in list {
                    let marker = if n.read { ' ' } else { '●' };
                    lines.push(format!("{marker} {} {}", n.kind.icon(), n.title));
                    lines.push(format!(
                        "    {} · {}",
                        truncate_text(&n.message, DEFAULT_TRUNCATE_LEN),
                        relative_time_str(n.timestamp.as_deref(), ctx.now)
                    ));
                }
            }
        }
        lines
    }
}
