//! A tour of the decorators, from a single wrapper up to redirected background chains.
//!
//! This example demonstrates:
//! - Wrapping closures, fn items and hand-written units
//! - Nesting decorators, including inside a background dispatch
//! - Assembling a custom decorator from two hooks
//! - Reusing a pre-built stack of layers
//!
//! Run with `cargo run --example decorator_chain`. Redirected output ends up in
//! `log.txt` in the working directory.

use decorum::prelude::*;

/// A hand-written unit with no arguments and no result.
struct SimpleFunctor;

impl Invocable<()> for SimpleFunctor {
    type Output = ();

    fn call(&self, _args: ()) {
        outln!("Hello world");
    }
}

fn hello(n: usize, name: &str) {
    for _ in 0..n {
        outln!("Hello {}", name);
    }
}

fn sum_below(n: u64) {
    let total: u64 = (0..n).sum();
    log::debug!("sum below {} is {}", n, total);
}

fn main() -> Result<(), DecoratorError> {
    // ========================================================================
    // Single decorators
    // ========================================================================

    Trace::new(hello).call((3usize, "name"));
    outln!();

    let name = PrintResult::new(|name: String| name).call(("name".to_string(),));
    outln!("got back {}", name);
    outln!();

    // ========================================================================
    // Nesting
    // ========================================================================

    Trace::new(PrintResult::new(|name: String| name)).call(("name".to_string(),));
    outln!();

    Trace::new(PrintResult::new(SimpleFunctor)).call(());
    outln!();

    let checked = ExceptionGuard::new(|num: i32| -> i32 {
        if num < 0 {
            panic!("negative input: {}", num);
        }
        num
    });
    checked.call((-1,));
    if let Err(err) = checked.try_call((-2,)) {
        outln!("try_call reported: {}", err);
    }
    outln!();

    // ========================================================================
    // Background dispatch
    // ========================================================================

    let deferred = AsyncDispatch::new(hello).autojoin(false);
    deferred.try_call((3usize, "name"))?;
    deferred.join()?;
    outln!();

    AsyncDispatch::new(Trace::new(PrintResult::new(ExceptionGuard::new(hello))))
        .call((3usize, "name"));
    outln!();

    sum_below
        .guarded()
        .print_result()
        .traced()
        .timed()
        .dispatched(true)
        .call((1_000_000u64,));
    outln!();

    Timestamp::new(sum_below).call((100_000u64,));
    outln!();

    // ========================================================================
    // Redirection
    // ========================================================================

    LogRedirect::new(Timing::new(Trace::new(PrintResult::new(Timestamp::new(
        sum_below,
    )))))
    .call((10_000_000u64,));
    outln!();

    AsyncDispatch::new(LogRedirect::new(Timing::new(Trace::new(
        PrintResult::new(Timestamp::new(hello)),
    ))))
    .call((1000usize, "name"));
    outln!();

    // ========================================================================
    // Custom decorators and stacks
    // ========================================================================

    let hello_world = || outln!("Hello world");
    custom(hello_world, hello_world, hello_world).call(());
    outln!();

    let audited = TimingLayer.around(TraceLayer).around(ExceptionGuardLayer);
    let total = audited.layer(|a: i32, b: i32| a + b).call((2, 3));
    outln!("total {}", total);

    Ok(())
}
