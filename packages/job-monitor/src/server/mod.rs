pub mod handler;

pub use handler::{handle_invocation, InvocationResponse};

/// Install the process-wide tracing subscriber.
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,job_monitor_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
