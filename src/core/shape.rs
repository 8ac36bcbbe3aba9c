//! Result-shape classification.
//!
//! Every decorator that reports on a result needs one body for units that
//! produce nothing and another for units that produce a value. The split is
//! decided here, once per output type, through [`Returns::SHAPE`].

use std::fmt::Display;

/// Static classification of a unit's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeTag {
    /// The unit returns `()`.
    NoValue,
    /// The unit returns something worth reporting.
    Value,
}

/// A classified result, carrying the rendering for the value case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    NoValue,
    Value(String),
}

/// Output types that decorators can classify and render.
///
/// `()` is the only no-value type. Implement this for your own types with
/// [`impl_returns!`](crate::impl_returns) when they implement `Display`.
pub trait Returns {
    const SHAPE: ShapeTag = ShapeTag::Value;

    fn render(&self) -> String;

    fn shape(&self) -> Shape {
        match Self::SHAPE {
            ShapeTag::NoValue => Shape::NoValue,
            ShapeTag::Value => Shape::Value(self.render()),
        }
    }
}

impl Returns for () {
    const SHAPE: ShapeTag = ShapeTag::NoValue;

    fn render(&self) -> String {
        String::new()
    }
}

/// Implements [`Returns`] for types that render through `Display`.
#[macro_export]
macro_rules! impl_returns {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Returns for $ty {
                fn render(&self) -> String {
                    ::std::string::ToString::to_string(self)
                }
            }
        )+
    };
}

impl_returns!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
    serde_json::Value,
);

impl Returns for &str {
    fn render(&self) -> String {
        (*self).to_string()
    }
}

impl<T: Returns> Returns for Option<T> {
    fn render(&self) -> String {
        match self {
            Some(value) => format!("Some({})", value.render()),
            None => "None".to_string(),
        }
    }
}

impl<T: Returns> Returns for Vec<T> {
    fn render(&self) -> String {
        let items: Vec<String> = self.iter().map(Returns::render).collect();
        format!("[{}]", items.join(", "))
    }
}

impl<T: Returns, E: Display> Returns for Result<T, E> {
    fn render(&self) -> String {
        match self {
            Ok(value) => format!("Ok({})", value.render()),
            Err(err) => format!("Err({})", err),
        }
    }
}
