//! `format!`-style macros over the process-wide logger.
//!
//! ```rust,ignore
//! stashlog_core::warn!("disk at {}%", 91);
//! stashlog_core::stash!("req-42", "latency={}ms", 120);
//! ```

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::global::errorf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::global::debugf(::std::format_args!($($arg)+))
    };
}

/// Logs at FATAL, then terminates the process.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::global::fatalf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::global::infof(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::global::warnf(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! stash {
    ($request_id:expr, $($arg:tt)+) => {
        $crate::global::stashf($request_id, ::std::format_args!($($arg)+))
    };
}
