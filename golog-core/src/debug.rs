/// Environment variable that turns on verbose diagnostics.
pub const DEBUG_ENV_VAR: &str = "GOLOG_DEBUG";

/// True when `GOLOG_DEBUG` holds a non-empty value.
///
/// Read on every call so a long-running embedder can toggle it.
pub fn debugging() -> bool {
    std::env::var_os(DEBUG_ENV_VAR).map_or(false, |v| !v.is_empty())
}

/// Emit a `tracing` debug event, but only while [`debugging`] is on.
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        if $crate::debug::debugging() {
            ::tracing::debug!($($arg)+);
        }
    };
}
