use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional verbose mode.
///
/// By default only warning-level and above events are emitted, so a normal
/// run keeps stderr quiet. With `verbose` set, info-level events are
/// included as well.
pub fn init_logging(verbose: bool) {
    let directive = if verbose {
        "deskstart=info"
    } else {
        "deskstart=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive(directive.parse().expect("Invalid log directive")),
        )
        .init();
}
