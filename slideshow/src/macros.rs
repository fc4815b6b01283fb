/// Emits a `tracing` event at `$level` under `$target`. Expands to nothing without the
/// `tracing` feature, so arguments are never evaluated.
#[cfg(feature = "tracing")]
#[doc(hidden)]
#[macro_export]
macro_rules! __slog {
    ($level:ident, $target:literal, $($tt:tt)*) => {
        $crate::__private::tracing::$level!(target: $target, $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
#[doc(hidden)]
#[macro_export]
macro_rules! __slog {
    ($($tt:tt)*) => {};
}

macro_rules! strace {
    ($($tt:tt)*) => {
        $crate::__slog!(trace, "slideshow", $($tt)*)
    };
}

macro_rules! sdebug {
    ($($tt:tt)*) => {
        $crate::__slog!(debug, "slideshow", $($tt)*)
    };
}

macro_rules! swarn {
    ($($tt:tt)*) => {
        $crate::__slog!(warn, "slideshow", $($tt)*)
    };
}
