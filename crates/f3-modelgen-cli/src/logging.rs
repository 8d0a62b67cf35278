use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::prelude::*;

/// Install the JSON event logger on stdout.
///
/// Events carry an `event` field plus key-value context; timestamps are
/// RFC 3339 UTC. Re-initialization (e.g. across tests) is a no-op.
pub fn init() {
    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_timer(UtcTime::rfc_3339())
        .with_writer(std::io::stdout);

    let _ = tracing_subscriber::registry().with(layer).try_init();
}
