use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initialize structured logging for binary and test consumers.
///
/// The library itself emits no events; this hook exists so pipelines that
/// embed the crate can share one subscriber configuration.
///
/// Defaults to `error` level unless overridden by `VOICESPAN_LOG`. Output is
/// JSON when `VOICESPAN_LOG_FORMAT=json`, human-readable otherwise.
pub fn init() {
    let filter = EnvFilter::builder()
        .with_env_var("VOICESPAN_LOG")
        .with_default_directive(tracing::level_filters::LevelFilter::ERROR.into())
        .from_env_lossy();

    let registry = tracing_subscriber::registry().with(filter);

    let wants_json = std::env::var("VOICESPAN_LOG_FORMAT").is_ok_and(|v| v == "json");
    let result = if wants_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    // A second init (common in test binaries) is a no-op, not an error.
    let _ = result;
}
