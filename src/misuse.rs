//! Misuse failures raised by the panicking extractors.
//!
//! Calling [`Outcome::unwrap`](crate::Outcome::unwrap) on an `Err`, or
//! [`Outcome::unwrap_err`](crate::Outcome::unwrap_err) on an `Ok`, is a programmer
//! error rather than a domain failure. Every such call funnels through [`fail`], which
//! panics with the pre-formatted diagnostic held by a [`MisuseError`].
//!
//! The diagnostic text is part of the public contract:
//!
//! | Call | Diagnostic |
//! |------|------------|
//! | `err("boom").unwrap()` | ``panics with `boom` `` |
//! | `err("boom").expect("msg")` | ``panics with `msg: boom` `` |
//! | `ok(2).unwrap_err()` | ``panics with `2` `` |
//! | `ok(10).expect_err("msg")` | ``panics with `msg: 10` `` |
//!
//! # Examples
//!
//! ```
//! use result_rail::{err, Outcome};
//! use result_rail::misuse::MisuseKind;
//!
//! let failed: Outcome<i32, &str> = err("boom");
//! let misuse = failed.try_unwrap().unwrap_err();
//!
//! assert_eq!(misuse.kind(), MisuseKind::UnwrapOnErr);
//! assert_eq!(misuse.message(), "panics with `boom`");
//! ```

use crate::alloc_type::{format, String};
use core::fmt::{self, Display};

/// Which extraction was attempted against the wrong variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MisuseKind {
    /// `unwrap`/`expect` called on an `Err`.
    UnwrapOnErr,
    /// `unwrap_err`/`expect_err` called on an `Ok`.
    UnwrapErrOnOk,
    /// `unwrap`/`expect` called on a `Maybe::None`.
    UnwrapOnNone,
}

impl MisuseKind {
    /// Short, stable identifier used in log fields.
    #[must_use]
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            MisuseKind::UnwrapOnErr => "unwrap_on_err",
            MisuseKind::UnwrapErrOnOk => "unwrap_err_on_ok",
            MisuseKind::UnwrapOnNone => "unwrap_on_none",
        }
    }
}

impl Display for MisuseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A wrong-variant extraction, carrying its fully formatted diagnostic.
///
/// `Display` writes the diagnostic verbatim, so `misuse.to_string()` is exactly the
/// text the corresponding panicking extractor would raise.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MisuseError {
    kind: MisuseKind,
    message: String,
}

impl MisuseError {
    /// Builds a diagnostic of the form ``panics with `<payload>` ``.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::misuse::{MisuseError, MisuseKind};
    ///
    /// let misuse = MisuseError::new(MisuseKind::UnwrapErrOnOk, &2);
    /// assert_eq!(misuse.to_string(), "panics with `2`");
    /// ```
    #[must_use]
    pub fn new(kind: MisuseKind, payload: &dyn Display) -> Self {
        Self { kind, message: format!("panics with `{}`", payload) }
    }

    /// Builds a diagnostic of the form ``panics with `<context>: <payload>` ``.
    ///
    /// # Examples
    ///
    /// ```
    /// use result_rail::misuse::{MisuseError, MisuseKind};
    ///
    /// let misuse = MisuseError::with_context(MisuseKind::UnwrapOnErr, "msg", &"boom");
    /// assert_eq!(misuse.to_string(), "panics with `msg: boom`");
    /// ```
    #[must_use]
    pub fn with_context(kind: MisuseKind, context: &str, payload: &dyn Display) -> Self {
        Self { kind, message: format!("panics with `{}: {}`", context, payload) }
    }

    /// Builds a diagnostic of the form ``panics with `<context>` `` with no payload.
    #[must_use]
    pub fn bare(kind: MisuseKind, context: &str) -> Self {
        Self { kind, message: format!("panics with `{}`", context) }
    }

    /// Which extraction failed.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> MisuseKind {
        self.kind
    }

    /// The full diagnostic text.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the error, returning its diagnostic text.
    #[must_use]
    #[inline]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl Display for MisuseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for MisuseError {}

/// Raises `misuse` as a panic whose message is exactly [`MisuseError::message`].
///
/// With the `tracing` feature enabled, an error event is recorded first.
#[cold]
#[inline(never)]
#[track_caller]
pub fn fail(misuse: MisuseError) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(
        target: "result_rail::misuse",
        kind = misuse.kind.as_str(),
        diagnostic = %misuse.message,
        "extraction on the wrong variant"
    );

    panic!("{}", misuse.message)
}
