use crate::core::{Adapter, Invocable};

/// A decorator assembled from two hooks.
///
/// Every call runs `before`, then the main unit, then `after`, each with its
/// own copy of the arguments, and returns the main unit's result. Whatever the
/// hooks return is dropped.
#[derive(Clone, Debug)]
pub struct Custom<B, U, A> {
    before: B,
    inner: Adapter<U>,
    after: A,
}

impl<B, U, A> Custom<B, U, A> {
    pub fn new(before: B, unit: U, after: A) -> Self {
        Custom {
            before,
            inner: Adapter::new(unit),
            after,
        }
    }

    pub fn into_parts(self) -> (B, U, A) {
        (self.before, self.inner.into_inner(), self.after)
    }
}

/// Builds a [`Custom`] decorator from `before`, `main` and `after`.
pub fn custom<B, U, A>(before: B, main: U, after: A) -> Custom<B, U, A> {
    Custom::new(before, main, after)
}

impl<Args, B, U, A> Invocable<Args> for Custom<B, U, A>
where
    Args: Clone,
    B: Invocable<Args>,
    U: Invocable<Args>,
    A: Invocable<Args>,
{
    type Output = U::Output;

    fn call(&self, args: Args) -> Self::Output {
        self.before.call(args.clone());
        let output = self.inner.call(args.clone());
        self.after.call(args);
        output
    }
}
