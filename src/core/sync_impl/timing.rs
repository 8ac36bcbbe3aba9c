use std::time::{Duration, Instant};

use crate::core::console;
use crate::core::{Adapter, Invocable};

const NAME: &str = "timing";

/// Prints how long the inner unit took, measured on the monotonic clock.
#[derive(Clone, Debug)]
pub struct Timing<U> {
    inner: Adapter<U>,
}

impl<U> Timing<U> {
    pub fn new(unit: U) -> Self {
        Timing {
            inner: Adapter::new(unit),
        }
    }

    pub fn into_inner(self) -> U {
        self.inner.into_inner()
    }
}

impl<Args, U> Invocable<Args> for Timing<U>
where
    U: Invocable<Args>,
{
    type Output = U::Output;

    fn call(&self, args: Args) -> Self::Output {
        let start = Instant::now();
        let output = self.inner.call(args);
        report(start.elapsed());
        output
    }
}

fn report(elapsed: Duration) {
    console::emit(format!(
        "{NAME}: time to perform the function: [{:.6}] seconds",
        elapsed.as_secs_f64()
    ));
}
