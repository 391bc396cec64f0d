//! Error instrumentation.
//!
//! With the `tracing` feature enabled, `failure!` emits a `debug` event for
//! the error before handing it back to the caller. Without the feature the
//! macro expands to the error expression alone.

#![allow(unused_macros)]

/// Evaluates to the given [`ListError`](crate::error::ListError), recording it
/// as a `tracing` event when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! failure {
    ($error:expr) => {{
        let error: $crate::error::ListError = $error;
        match &error {
            $crate::error::ListError::EmptySequence { operation } => {
                ::tracing::debug!(operation = *operation, "empty sequence");
            }
            $crate::error::ListError::ExhaustedGuards { clauses } => {
                ::tracing::debug!(clauses = *clauses, "guards exhausted");
            }
        }
        error
    }};
}

#[cfg(not(feature = "tracing"))]
macro_rules! failure {
    ($error:expr) => {{
        let error: $crate::error::ListError = $error;
        error
    }};
}
