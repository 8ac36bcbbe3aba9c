use std::panic::{self, AssertUnwindSafe};

use crate::core::console;
use crate::core::error::{panic_message, DecoratorError};
use crate::core::{Adapter, Invocable};

const NAME: &str = "exception_guard";

/// Contains panics raised by the inner unit.
///
/// Two ways to call it:
/// - [`ExceptionGuard::try_call`] reports the failure as
///   [`DecoratorError::Panicked`] and lets the caller decide.
/// - [`Invocable::call`] applies the fallback policy: the failure is printed
///   and `Default::default()` is returned in place of the result. A caller
///   cannot tell that result apart from a genuine default, so only wrap units
///   whose failures you are happy to lose.
///
/// On success `call` prints `exception_guard: no error in function` for every
/// result shape, including units that return nothing.
///
/// The panic hook still runs, so the standard panic message shows up on stderr.
#[derive(Clone, Debug)]
pub struct ExceptionGuard<U> {
    inner: Adapter<U>,
}

impl<U> ExceptionGuard<U> {
    pub fn new(unit: U) -> Self {
        ExceptionGuard {
            inner: Adapter::new(unit),
        }
    }

    pub fn into_inner(self) -> U {
        self.inner.into_inner()
    }

    /// Runs the inner unit and reports a panic instead of propagating it.
    pub fn try_call<Args>(&self, args: Args) -> Result<U::Output, DecoratorError>
    where
        U: Invocable<Args>,
    {
        panic::catch_unwind(AssertUnwindSafe(|| self.inner.call(args)))
            .map_err(|payload| DecoratorError::Panicked(panic_message(&*payload)))
    }
}

impl<Args, U> Invocable<Args> for ExceptionGuard<U>
where
    U: Invocable<Args>,
    U::Output: Default,
{
    type Output = U::Output;

    fn call(&self, args: Args) -> Self::Output {
        match self.try_call(args) {
            Ok(output) => {
                console::emit(format!("{NAME}: no error in function"));
                output
            }
            Err(err) => {
                log::warn!("{NAME} suppressed a failure: {err}");
                let message = match &err {
                    DecoratorError::Panicked(message) => message.clone(),
                    other => other.to_string(),
                };
                console::emit(format!("{NAME}: error in function: [{message}]"));
                U::Output::default()
            }
        }
    }
}
