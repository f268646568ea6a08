//! Opt-in tracing setup for hosts embedding `ggraph`.
//!
//! The engine only emits `tracing` events. Hosts that already run a
//! subscriber need nothing from this module.

/// Filter used when `RUST_LOG` is unset: engine events at `info`, prepare
/// pass timings at `debug`.
pub const DEFAULT_FILTER: &str = "warn,ggraph=info,ggraph::render::prepare=debug";

/// Installs a compact subscriber honoring `RUST_LOG`, or `DEFAULT_FILTER`.
///
/// Returns `false` when the `telemetry` feature is off or a global
/// subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    let directives = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_owned());
    init_tracing_with_filter(&directives).unwrap_or(false)
}

/// Installs a compact subscriber with explicit filter directives.
///
/// Malformed directives are a configuration error. Worker thread names are
/// included so prepare-pool events can be told apart.
pub fn init_tracing_with_filter(directives: &str) -> crate::PlotResult<bool> {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_new(directives).map_err(|err| {
            crate::PlotError::Config(format!("invalid tracing filter `{directives}`: {err}"))
        })?;
        Ok(tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_thread_names(true)
            .compact()
            .try_init()
            .is_ok())
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directives;
        Ok(false)
    }
}
