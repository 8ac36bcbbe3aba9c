//! Reusable decorator recipes.
//!
//! A [`Layer`] knows how to wrap a unit in one decorator. Layers stack with
//! [`LayerExt::around`]: `a.around(b).around(c).layer(unit)` builds exactly
//! `A(B(C(unit)))`, so a composite can be assembled once and applied to many
//! units.

use std::path::PathBuf;

use crate::core::async_impl::{AsyncDispatch, DEFAULT_AUTOJOIN};
use crate::core::console::OpenMode;
use crate::core::sync_impl::log_redirect::DEFAULT_LOG_PATH;
use crate::core::sync_impl::{
    Custom, ExceptionGuard, LogRedirect, PrintResult, Timestamp, Timing, Trace,
};

pub trait Layer<U> {
    type Decorated;

    fn layer(&self, unit: U) -> Self::Decorated;
}

/// `outer` applied on top of whatever `inner` produces.
#[derive(Clone, Debug)]
pub struct Stack<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

impl<U, Outer, Inner> Layer<U> for Stack<Outer, Inner>
where
    Inner: Layer<U>,
    Outer: Layer<Inner::Decorated>,
{
    type Decorated = Outer::Decorated;

    fn layer(&self, unit: U) -> Self::Decorated {
        self.outer.layer(self.inner.layer(unit))
    }
}

pub trait LayerExt: Sized {
    /// Puts `self` outside `inner`.
    fn around<Inner>(self, inner: Inner) -> Stack<Self, Inner> {
        Stack { outer: self, inner }
    }
}

impl<L> LayerExt for L {}

macro_rules! unit_layer {
    ($(#[$doc:meta])* $layer:ident => $decorator:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $layer;

        impl<U> Layer<U> for $layer {
            type Decorated = $decorator<U>;

            fn layer(&self, unit: U) -> Self::Decorated {
                $decorator::new(unit)
            }
        }
    };
}

unit_layer!(
    /// Wraps in [`Trace`].
    TraceLayer => Trace
);
unit_layer!(
    /// Wraps in [`PrintResult`].
    PrintResultLayer => PrintResult
);
unit_layer!(
    /// Wraps in [`ExceptionGuard`].
    ExceptionGuardLayer => ExceptionGuard
);
unit_layer!(
    /// Wraps in [`Timing`].
    TimingLayer => Timing
);
unit_layer!(
    /// Wraps in [`Timestamp`].
    TimestampLayer => Timestamp
);

/// Wraps in [`LogRedirect`] with a fixed path and mode.
#[derive(Clone, Debug)]
pub struct LogRedirectLayer {
    path: PathBuf,
    mode: OpenMode,
}

impl LogRedirectLayer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        LogRedirectLayer {
            path: path.into(),
            mode: OpenMode::default(),
        }
    }

    pub fn mode(mut self, mode: OpenMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for LogRedirectLayer {
    fn default() -> Self {
        LogRedirectLayer::new(DEFAULT_LOG_PATH)
    }
}

impl<U> Layer<U> for LogRedirectLayer {
    type Decorated = LogRedirect<U>;

    fn layer(&self, unit: U) -> Self::Decorated {
        LogRedirect::with_path(unit, self.path.clone()).mode(self.mode)
    }
}

/// Wraps in [`AsyncDispatch`].
#[derive(Clone, Copy, Debug)]
pub struct AsyncDispatchLayer {
    autojoin: bool,
}

impl AsyncDispatchLayer {
    pub fn new(autojoin: bool) -> Self {
        AsyncDispatchLayer { autojoin }
    }
}

impl Default for AsyncDispatchLayer {
    fn default() -> Self {
        AsyncDispatchLayer::new(DEFAULT_AUTOJOIN)
    }
}

impl<U> Layer<U> for AsyncDispatchLayer {
    type Decorated = AsyncDispatch<U>;

    fn layer(&self, unit: U) -> Self::Decorated {
        AsyncDispatch::new(unit).autojoin(self.autojoin)
    }
}

/// Wraps in [`Custom`] with clones of the same two hooks.
#[derive(Clone, Debug)]
pub struct HooksLayer<B, A> {
    before: B,
    after: A,
}

impl<B, A> HooksLayer<B, A> {
    pub fn new(before: B, after: A) -> Self {
        HooksLayer { before, after }
    }
}

impl<U, B: Clone, A: Clone> Layer<U> for HooksLayer<B, A> {
    type Decorated = Custom<B, U, A>;

    fn layer(&self, unit: U) -> Self::Decorated {
        Custom::new(self.before.clone(), unit, self.after.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Invocable;
    use crate::core::console::capture;
    use crate::outln;

    fn greet(n: usize, name: &str) {
        for _ in 0..n {
            outln!("Hello {}", name);
        }
    }

    #[test]
    fn test_stack_matches_manual_nesting() {
        let manual = Trace::new(PrintResult::new(ExceptionGuard::new(greet)));
        let stacked = TraceLayer
            .around(PrintResultLayer)
            .around(ExceptionGuardLayer)
            .layer(greet);

        let ((), expected) = capture(|| manual.call((2usize, "name")));
        let ((), actual) = capture(|| stacked.call((2usize, "name")));

        assert_eq!(actual, expected);
        assert_eq!(
            actual,
            vec![
                "trace: start calling with args: [2] [name]",
                "Hello name",
                "Hello name",
                "exception_guard: no error in function",
                "print_result: no result: function has no return value",
                "trace: end calling with args: [2] [name]",
            ]
        );
    }

    #[test]
    fn test_grouping_does_not_change_order() {
        let left = TraceLayer.around(PrintResultLayer).around(ExceptionGuardLayer);
        let right = TraceLayer.around(PrintResultLayer.around(ExceptionGuardLayer));
        let unit = |n: i32| n + 1;

        let (a, left_lines) = capture(|| left.layer(unit).call((1,)));
        let (b, right_lines) = capture(|| right.layer(unit).call((1,)));

        assert_eq!((a, b), (2, 2));
        assert_eq!(left_lines, right_lines);
    }

    #[test]
    fn test_configured_layers() {
        let redirect = LogRedirectLayer::default().mode(OpenMode::Truncate).layer(|| ());
        assert_eq!(redirect.path(), std::path::Path::new(DEFAULT_LOG_PATH));

        let dispatch = AsyncDispatchLayer::new(false).layer(|| ());
        assert!(!dispatch.is_autojoin());
        assert!(AsyncDispatchLayer::default().layer(|| ()).is_autojoin());
    }

    #[test]
    fn test_hooks_layer() {
        let hooks = HooksLayer::new(|| outln!("before"), || outln!("after"));
        let decorated = hooks.layer(|| 5);

        let (result, lines) = capture(|| decorated.call(()));

        assert_eq!(result, 5);
        assert_eq!(lines, vec!["before", "after"]);
    }
}
