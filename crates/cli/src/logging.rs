use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub const ENV_LOG_FORMAT: &str = "WONDER_LOG_FORMAT";

/// Install the global subscriber. `RUST_LOG` filters (default `warn`, so the
/// rendered dashboard stays readable); `WONDER_LOG_FORMAT=json` switches to JSON lines.
/// Logs go to stderr.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if json_requested() {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

/// Whether `WONDER_LOG_FORMAT` asks for JSON lines.
pub fn json_requested() -> bool {
    std::env::var(ENV_LOG_FORMAT).is_ok_and(|f| f.trim().eq_ignore_ascii_case("json"))
}
