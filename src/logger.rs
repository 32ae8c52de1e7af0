use tracing_subscriber::prelude::*;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
};

/// Installs the global subscriber, reading `RUST_LOG` and falling back to `info`.
pub fn init() {
    init_with_default("info");
}

/// Like [`init`] with a caller-chosen fallback level. Span close events,
/// which carry per-stage timings, are only printed when debug output is on.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_with_default(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let is_debug = {
        let directives = env_filter.to_string();
        directives.contains("debug") || directives.contains("trace")
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(if is_debug {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        });

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_can_run_twice() {
        init_with_default("debug");
        init();
        tracing::debug!("logger initialised");
    }
}
