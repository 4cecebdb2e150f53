//! Macros for last-resort debugging.
//!
//! Errors are produced in many places deep inside the codecs and the
//! messages they carry don’t always make it obvious which check fired. The
//! `xerr!()` macro wraps the expression that produces an error and logs the
//! source location at trace level before resolving into whatever the
//! expression resolves to. With the `extra-debug` feature, a backtrace is
//! printed to stderr as well. Use it whenever you initially produce an
//! error, i.e.:
//!
//! ```rust,ignore
//! if foo {
//!     xerr!(return Err(ContentError::from_static("foo")))
//! }
//! ```

#[cfg(feature = "extra-debug")]
#[macro_export]
macro_rules! xerr {
    ($test:expr) => {{
        log::trace!("error produced at {}:{}", file!(), line!());
        eprintln!(
            "--- EXTRA DEBUG ---\n{}\n--- EXTRA DEBUG ---",
            std::backtrace::Backtrace::force_capture()
        );
        $test
    }}
}

#[cfg(not(feature = "extra-debug"))]
#[macro_export]
macro_rules! xerr {
    ($test:expr) => {{
        log::trace!("error produced at {}:{}", file!(), line!());
        $test
    }}
}
