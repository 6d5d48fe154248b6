use thiserror::Error;

/// Unified error type for the entire wonder-finance-core library.
/// Every fallible public function returns `Result<T, DashboardError>`.
#[derive(Debug, Error)]
pub enum DashboardError {
    // ── Configuration / Session ─────────────────────────────────────
    #[error("Backend URL not configured")]
    MissingConfig,

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Session error: {0}")]
    Session(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── API / Network ───────────────────────────────────────────────
    #[error("Failed to fetch {endpoint}: {status}")]
    Http { endpoint: String, status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    NoData(String),

    #[error("Refresh cancelled")]
    Cancelled,
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for DashboardError {
    fn from(e: std::io::Error) -> Self {
        DashboardError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        DashboardError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors carry the full URL; strip the query string so
        // request parameters never end up in widget banners or logs.
        let msg = e.to_string();
        DashboardError::Network(redact_query(&msg))
    }
}

pub(crate) fn redact_query(msg: &str) -> String {
    match msg.find('?') {
        Some(idx) => format!("{}?<query redacted>", &msg[..idx]),
        None => msg.to_string(),
    }
}
