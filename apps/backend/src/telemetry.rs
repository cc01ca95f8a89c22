//! Process-wide tracing subscriber for the server binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Output encoding, chosen with `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per line, including the current request span.
    #[default]
    Json,
    /// Human-readable single-line output for local development.
    Compact,
}

impl LogFormat {
    /// Unknown values fall back to JSON.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("compact" | "pretty" | "text") => Self::Compact,
            _ => Self::Json,
        }
    }

    pub fn from_env() -> Self {
        Self::parse(std::env::var("LOG_FORMAT").ok().as_deref())
    }
}

/// `RUST_LOG` overrides the default `info,actix_web=info` filter.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_target(false)
                    .with_ansi(false),
            )
            .init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(false))
            .init(),
    }
}
