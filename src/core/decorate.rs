use std::path::PathBuf;

use crate::core::async_impl::AsyncDispatch;
use crate::core::layer::Layer;
use crate::core::sync_impl::{
    Custom, ExceptionGuard, LogRedirect, PrintResult, Timestamp, Timing, Trace,
};

/// Fluent wrapping, available on every value.
///
/// Methods read inside-out: `unit.guarded().traced()` is
/// `Trace(ExceptionGuard(unit))`.
pub trait Decorate: Sized {
    fn traced(self) -> Trace<Self> {
        Trace::new(self)
    }

    fn print_result(self) -> PrintResult<Self> {
        PrintResult::new(self)
    }

    fn guarded(self) -> ExceptionGuard<Self> {
        ExceptionGuard::new(self)
    }

    fn timed(self) -> Timing<Self> {
        Timing::new(self)
    }

    fn timestamped(self) -> Timestamp<Self> {
        Timestamp::new(self)
    }

    fn redirected(self, path: impl Into<PathBuf>) -> LogRedirect<Self> {
        LogRedirect::with_path(self, path)
    }

    fn dispatched(self, autojoin: bool) -> AsyncDispatch<Self> {
        AsyncDispatch::new(self).autojoin(autojoin)
    }

    fn with_hooks<B, A>(self, before: B, after: A) -> Custom<B, Self, A> {
        Custom::new(before, self, after)
    }

    fn layered<L: Layer<Self>>(self, layer: L) -> L::Decorated {
        layer.layer(self)
    }
}

impl<T> Decorate for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Invocable;
    use crate::core::console::capture;
    use crate::core::layer::{LayerExt, PrintResultLayer, TraceLayer};
    use crate::outln;

    #[test]
    fn test_fluent_chain_reads_inside_out() {
        let decorated = (|name: String| name).print_result().traced();

        let (result, lines) = capture(|| decorated.call(("name".to_string(),)));

        assert_eq!(result, "name");
        assert_eq!(
            lines,
            vec![
                "trace: start calling with args: [name]",
                "print_result: result of function: [name]",
                "trace: end calling with args: [name]",
            ]
        );
    }

    #[test]
    fn test_layered_equals_fluent() {
        let fluent = (|| outln!("Hello world")).print_result().traced();
        let layered = (|| outln!("Hello world")).layered(TraceLayer.around(PrintResultLayer));

        let ((), a) = capture(|| fluent.call(()));
        let ((), b) = capture(|| layered.call(()));

        assert_eq!(a, b);
    }

    #[test]
    fn test_with_hooks() {
        let decorated = (|| outln!("Hello world"))
            .with_hooks(|| outln!("before"), || outln!("after"));

        let ((), lines) = capture(|| decorated.call(()));

        assert_eq!(lines, vec!["before", "Hello world", "after"]);
    }

    #[test]
    fn test_dispatched_and_guarded() {
        let decorated = (|| -> () { panic!("boom") }).guarded().dispatched(true);

        let ((), lines) = capture(|| decorated.call(()));

        assert!(lines.iter().any(|l| l == "exception_guard: error in function: [boom]"));
    }
}
