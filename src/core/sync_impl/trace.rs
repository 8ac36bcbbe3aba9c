use crate::core::args::ArgList;
use crate::core::console;
use crate::core::{Adapter, Invocable};

const NAME: &str = "trace";

/// Prints the call's arguments before and after running the inner unit.
///
/// ```text
/// trace: start calling with args: [3] [name]
/// ...
/// trace: end calling with args: [3] [name]
/// ```
#[derive(Clone, Debug)]
pub struct Trace<U> {
    inner: Adapter<U>,
}

impl<U> Trace<U> {
    pub fn new(unit: U) -> Self {
        Trace {
            inner: Adapter::new(unit),
        }
    }

    pub fn into_inner(self) -> U {
        self.inner.into_inner()
    }
}

impl<Args, U> Invocable<Args> for Trace<U>
where
    U: Invocable<Args>,
    Args: ArgList,
{
    type Output = U::Output;

    fn call(&self, args: Args) -> Self::Output {
        // Rendered up front; the arguments move into the inner call.
        let rendered = args.render();
        console::emit(format!("{NAME}: start calling with args: {rendered}"));
        let output = self.inner.call(args);
        console::emit(format!("{NAME}: end calling with args: {rendered}"));
        output
    }
}
