use chrono::Local;

use crate::core::console;
use crate::core::{Adapter, Invocable};

const NAME: &str = "timestamp";

/// Layout of the printed local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Prints the local calendar time just before running the inner unit.
#[derive(Clone, Debug)]
pub struct Timestamp<U> {
    inner: Adapter<U>,
}

impl<U> Timestamp<U> {
    pub fn new(unit: U) -> Self {
        Timestamp {
            inner: Adapter::new(unit),
        }
    }

    pub fn into_inner(self) -> U {
        self.inner.into_inner()
    }
}

impl<Args, U> Invocable<Args> for Timestamp<U>
where
    U: Invocable<Args>,
{
    type Output = U::Output;

    fn call(&self, args: Args) -> Self::Output {
        let now = Local::now().format(TIMESTAMP_FORMAT);
        console::emit(format!("{NAME}: current time of function execution: [{now}]"));
        self.inner.call(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::capture;
    use crate::outln;
    use chrono::NaiveDateTime;

    #[test]
    fn test_time_is_printed_before_the_call() {
        let stamped = Timestamp::new(|| outln!("working"));

        let ((), lines) = capture(|| stamped.call(()));

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "working");

        let prefix = "timestamp: current time of function execution: [";
        let stamp = lines[0]
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_suffix(']'))
            .unwrap();
        assert!(NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_value_is_returned_unchanged() {
        let stamped = Timestamp::new(|a: i32, b: i32| a - b);
        let (result, _lines) = capture(|| stamped.call((10, 3)));
        assert_eq!(result, 7);
    }
}
