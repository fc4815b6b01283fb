macro_rules! strace {
    ($($tt:tt)*) => {
        slideshow::__slog!(trace, "slideshow_adapter", $($tt)*)
    };
}

macro_rules! sdebug {
    ($($tt:tt)*) => {
        slideshow::__slog!(debug, "slideshow_adapter", $($tt)*)
    };
}

macro_rules! swarn {
    ($($tt:tt)*) => {
        slideshow::__slog!(warn, "slideshow_adapter", $($tt)*)
    };
}
