use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber, once per process.
///
/// Nothing is installed unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=psi_eval=debug psi run script.ps`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
