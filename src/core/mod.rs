pub mod args;
pub mod async_impl;
pub mod console;
pub mod decorate;
pub mod error;
pub mod layer;
pub mod shape;
pub mod sync_impl;

/// Anything that can be called with the argument tuple `Args`.
///
/// `Args` is always a tuple: `()`, `(A,)`, `(A, B)` and so on. Closures and fn
/// items get this for free through the blanket impls below, and every
/// decorator in this crate implements it too, so decorated units can be wrapped
/// again to any depth.
///
/// A hand-written type may implement `Invocable` for several argument tuples;
/// each one is dispatched on its own.
pub trait Invocable<Args> {
    /// What a call yields. `()` means the unit produces no value.
    type Output;

    /// Invoke the unit.
    fn call(&self, args: Args) -> Self::Output;
}

macro_rules! impl_invocable_for_fn {
    ($($arg:ident),*) => {
        impl<Func, Ret, $($arg,)*> Invocable<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Ret,
        {
            type Output = Ret;

            #[allow(non_snake_case)]
            fn call(&self, ($($arg,)*): ($($arg,)*)) -> Ret {
                (self)($($arg),*)
            }
        }
    };
}

impl_invocable_for_fn!();
impl_invocable_for_fn!(A1);
impl_invocable_for_fn!(A1, A2);
impl_invocable_for_fn!(A1, A2, A3);
impl_invocable_for_fn!(A1, A2, A3, A4);
impl_invocable_for_fn!(A1, A2, A3, A4, A5);
impl_invocable_for_fn!(A1, A2, A3, A4, A5, A6);
impl_invocable_for_fn!(A1, A2, A3, A4, A5, A6, A7);
impl_invocable_for_fn!(A1, A2, A3, A4, A5, A6, A7, A8);

/// The uniform wrapper every decorator keeps its inner unit in.
///
/// It adds nothing: arguments go in positionally, the result comes back as is,
/// and a panic raised by the unit passes straight through.
#[derive(Clone, Debug)]
pub struct Adapter<U> {
    unit: U,
}

impl<U> Adapter<U> {
    pub fn new(unit: U) -> Self {
        Adapter { unit }
    }

    pub fn get_ref(&self) -> &U {
        &self.unit
    }

    pub fn into_inner(self) -> U {
        self.unit
    }
}

impl<Args, U> Invocable<Args> for Adapter<U>
where
    U: Invocable<Args>,
{
    type Output = U::Output;

    fn call(&self, args: Args) -> Self::Output {
        self.unit.call(args)
    }
}

/// A unit that accepts any argument list and does nothing.
///
/// Handy as a hook for [`Custom`](crate::Custom) when only one side is needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Noop;

impl<Args> Invocable<Args> for Noop {
    type Output = ();

    fn call(&self, _args: Args) {}
}
