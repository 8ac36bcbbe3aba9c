use std::fmt::Display;

/// Renders an argument tuple for trace output.
pub trait ArgList {
    /// Number of arguments in the tuple.
    fn arity(&self) -> usize;

    /// One `[value]` per argument, space separated, or `no input arguments`.
    fn render(&self) -> String;
}

impl ArgList for () {
    fn arity(&self) -> usize {
        0
    }

    fn render(&self) -> String {
        "no input arguments".to_string()
    }
}

macro_rules! impl_arg_list {
    ($n:expr; $($arg:ident => $idx:tt),+) => {
        impl<$($arg: Display),+> ArgList for ($($arg,)+) {
            fn arity(&self) -> usize {
                $n
            }

            fn render(&self) -> String {
                let parts: [String; $n] = [$(format!("[{}]", self.$idx)),+];
                parts.join(" ")
            }
        }
    };
}

impl_arg_list!(1; A1 => 0);
impl_arg_list!(2; A1 => 0, A2 => 1);
impl_arg_list!(3; A1 => 0, A2 => 1, A3 => 2);
impl_arg_list!(4; A1 => 0, A2 => 1, A3 => 2, A4 => 3);
impl_arg_list!(5; A1 => 0, A2 => 1, A3 => 2, A4 => 3, A5 => 4);
impl_arg_list!(6; A1 => 0, A2 => 1, A3 => 2, A4 => 3, A5 => 4, A6 => 5);
impl_arg_list!(7; A1 => 0, A2 => 1, A3 => 2, A4 => 3, A5 => 4, A6 => 5, A7 => 6);
impl_arg_list!(8; A1 => 0, A2 => 1, A3 => 2, A4 => 3, A5 => 4, A6 => 5, A7 => 6, A8 => 7);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_argument_list() {
        assert_eq!(().arity(), 0);
        assert_eq!(().render(), "no input arguments");
    }

    #[test]
    fn test_arguments_render_in_call_order() {
        let args = (3usize, "name");
        assert_eq!(args.arity(), 2);
        assert_eq!(args.render(), "[3] [name]");
        assert_eq!((1.5f64,).render(), "[1.5]");
    }
}
