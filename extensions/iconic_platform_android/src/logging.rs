//! Logging initialization.

/// Initialize logging once for the host process. Safe to call again;
/// later calls are no-ops.
pub fn init_logging() {
    #[cfg(target_os = "android")]
    {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Info)
                .with_tag("iconic"),
        );
    }

    // Host builds (cross-compilation checks, tests) log to stderr.
    #[cfg(not(target_os = "android"))]
    {
        use tracing_subscriber::EnvFilter;

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }
}
