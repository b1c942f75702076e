//! Tracing setup for binaries built on LoopForge.
//!
//! Library code only emits `tracing` events; nothing is printed until a
//! subscriber is installed with [`init`] or [`init_with`].

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use loopforge_config::NestConfig;

static INIT: OnceLock<()> = OnceLock::new();

/// Directive used when neither `RUST_LOG` nor a config sets one.
pub const DEFAULT_FILTER: &str = "loopforge=info";

/// Installs the global subscriber, honouring `RUST_LOG`.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    install(|| EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)));
}

/// Installs the global subscriber with an explicit filter directive.
///
/// Safe to call multiple times - only the first call of any `init*`
/// function has effect.
pub fn init_with(directive: &str) {
    install(|| EnvFilter::new(directive));
}

/// Installs the global subscriber with the config's `log_filter`, falling
/// back to [`init`] when the config has none.
pub fn init_from_config(config: &NestConfig) {
    match config.log_filter.as_deref() {
        Some(directive) => init_with(directive),
        None => init(),
    }
}

fn install<F>(filter: F)
where
    F: FnOnce() -> EnvFilter,
{
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::registry()
            .with(filter())
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init();
    });
}
