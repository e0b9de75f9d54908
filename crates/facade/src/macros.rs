//! `format!`-style wrappers over the free functions.

/// Log formatted arguments at debug level on the default logger.
///
/// ```no_run
/// fieldlog::debugf!("cache size {}", 42);
/// ```
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::debugf(::core::format_args!($($arg)+))
    };
}

/// Log formatted arguments at info level on the default logger.
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::infof(::core::format_args!($($arg)+))
    };
}

/// Log formatted arguments at warning level on the default logger.
#[macro_export]
macro_rules! warnf {
    ($($arg:tt)+) => {
        $crate::warnf(::core::format_args!($($arg)+))
    };
}

/// Log formatted arguments at error level on the default logger.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::errorf(::core::format_args!($($arg)+))
    };
}

/// Log formatted arguments at fatal level on the default logger and exit.
#[macro_export]
macro_rules! fatalf {
    ($($arg:tt)+) => {
        $crate::fatalf(::core::format_args!($($arg)+))
    };
}

/// Log formatted arguments with the panic tag on the default logger and
/// unwind.
#[macro_export]
macro_rules! panicf {
    ($($arg:tt)+) => {
        $crate::panicf(::core::format_args!($($arg)+))
    };
}

/// Log formatted arguments at info level on the default logger.
#[macro_export]
macro_rules! printf {
    ($($arg:tt)+) => {
        $crate::printf(::core::format_args!($($arg)+))
    };
}
