use crate::core::console;
use crate::core::shape::{Returns, Shape};
use crate::core::{Adapter, Invocable};

const NAME: &str = "print_result";

/// Prints what the inner unit returned, then hands it back untouched.
#[derive(Clone, Debug)]
pub struct PrintResult<U> {
    inner: Adapter<U>,
}

impl<U> PrintResult<U> {
    pub fn new(unit: U) -> Self {
        PrintResult {
            inner: Adapter::new(unit),
        }
    }

    pub fn into_inner(self) -> U {
        self.inner.into_inner()
    }
}

impl<Args, U> Invocable<Args> for PrintResult<U>
where
    U: Invocable<Args>,
    U::Output: Returns,
{
    type Output = U::Output;

    fn call(&self, args: Args) -> Self::Output {
        let output = self.inner.call(args);
        match output.shape() {
            Shape::NoValue => {
                console::emit(format!("{NAME}: no result: function has no return value"))
            }
            Shape::Value(rendered) => {
                console::emit(format!("{NAME}: result of function: [{rendered}]"))
            }
        }
        output
    }
}
