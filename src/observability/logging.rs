//! Structured logging: subscriber setup and shared log-line emission.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::http::context::RequestContext;

/// Initialize the tracing subscriber.
///
/// Level defaults to `info` for this crate and is overridable through
/// `RUST_LOG`.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "greeting_relay=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Fixed shape shared by the summary and detail lines.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub status: u16,
    pub message: Option<&'a str>,
    pub elapsed_ms: u128,
}

/// Render the one-line request summary.
pub fn format_summary(record: &LogRecord<'_>) -> String {
    format!(
        "{} {} [{}]{} - elapsed {}ms",
        record.method,
        record.path,
        record.status,
        match record.message {
            Some(message) => format!(" - error: {}", message),
            None => String::new(),
        },
        record.elapsed_ms,
    )
}

/// Render the detail line: the summary fields plus the full request
/// context.
///
/// The context fields are included verbatim. Callers are responsible for
/// stripping sensitive values (tokens, keys) from the context before
/// emitting this record; no redaction happens here.
pub fn format_detail(record: &LogRecord<'_>, ctx: &RequestContext) -> String {
    format!(
        "method: {} | url: {} | ip: {} | params: {} | query: {} | body: {} | headers: {} | status: {}{} | elapsed: {}ms",
        record.method,
        record.path,
        ctx.client_ip,
        ctx.params,
        ctx.query,
        ctx.body,
        ctx.headers,
        record.status,
        match record.message {
            Some(message) => format!(" | error: {}", message),
            None => String::new(),
        },
        record.elapsed_ms,
    )
}

/// Emit the per-request completion line (the "finish" boundary).
///
/// Info for non-error outcomes, error otherwise. Exactly one line per
/// completed request.
pub fn emit_completion(record: &LogRecord<'_>) {
    if record.status >= 400 {
        tracing::error!("{}", format_summary(record));
    } else {
        tracing::info!("{}", format_summary(record));
    }
}

/// Emit the failure pair: summary line plus detail line.
pub fn emit_failure(record: &LogRecord<'_>, ctx: &RequestContext) {
    tracing::error!("{}", format_summary(record));
    tracing::error!("{}", format_detail(record, ctx));
}
