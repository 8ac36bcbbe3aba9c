use std::path::{Path, PathBuf};

use crate::core::console::{self, OpenMode, Sink};
use crate::core::error::DecoratorError;
use crate::core::{Adapter, Invocable};

const NAME: &str = "log_redirect";

/// File used when no path is configured.
pub const DEFAULT_LOG_PATH: &str = "log.txt";

/// Sends everything the inner unit writes to the console to a file.
///
/// The start and end markers go to the sink that was current before the call.
/// The file sink is only installed for this thread and only for the duration
/// of the inner call; the previous sink comes back on every exit path,
/// including a panic from the inner unit.
#[derive(Clone, Debug)]
pub struct LogRedirect<U> {
    inner: Adapter<U>,
    path: PathBuf,
    mode: OpenMode,
}

impl<U> LogRedirect<U> {
    /// Redirects to [`DEFAULT_LOG_PATH`] in append mode.
    pub fn new(unit: U) -> Self {
        LogRedirect::with_path(unit, DEFAULT_LOG_PATH)
    }

    pub fn with_path(unit: U, path: impl Into<PathBuf>) -> Self {
        LogRedirect {
            inner: Adapter::new(unit),
            path: path.into(),
            mode: OpenMode::default(),
        }
    }

    pub fn mode(mut self, mode: OpenMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_inner(self) -> U {
        self.inner.into_inner()
    }

    fn open(&self) -> Result<Sink, DecoratorError> {
        Sink::file(&self.path, self.mode).map_err(|source| DecoratorError::Redirect {
            path: self.path.clone(),
            source,
        })
    }

    fn run_redirected<Args>(&self, sink: Sink, args: Args) -> U::Output
    where
        U: Invocable<Args>,
    {
        let output = {
            let _guard = console::install(sink);
            self.inner.call(args)
        };
        console::emit(format!("{NAME}: end"));
        output
    }

    /// Like [`Invocable::call`], but a log file that cannot be opened is
    /// reported and the inner unit is not run.
    pub fn try_call<Args>(&self, args: Args) -> Result<U::Output, DecoratorError>
    where
        U: Invocable<Args>,
    {
        let sink = self.open()?;
        console::emit(format!("{NAME}: start"));
        Ok(self.run_redirected(sink, args))
    }
}

impl<Args, U> Invocable<Args> for LogRedirect<U>
where
    U: Invocable<Args>,
{
    type Output = U::Output;

    fn call(&self, args: Args) -> Self::Output {
        match self.open() {
            Ok(sink) => {
                console::emit(format!("{NAME}: start"));
                self.run_redirected(sink, args)
            }
            Err(err) => {
                // Run anyway; the output just stays where it was.
                log::error!("{NAME} could not redirect output: {err}");
                console::emit(format!("{NAME}: start"));
                self.run_redirected(console::current(), args)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::capture;
    use crate::outln;
    use std::fs;

    fn temp_log() -> PathBuf {
        std::env::temp_dir().join(format!("decorum-redirect-{}.log", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_output_lands_in_file_and_markers_on_console() {
        let path = temp_log();
        let redirected = LogRedirect::with_path(|n: usize| {
            for i in 0..n {
                outln!("line {}", i);
            }
        }, &path);

        let ((), lines) = capture(|| redirected.call((2,)));

        assert_eq!(lines, vec!["log_redirect: start", "log_redirect: end"]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "line 0\nline 1\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_value_path_restores_and_prints_end_marker() {
        let path = temp_log();
        let redirected = LogRedirect::with_path(|name: String| {
            outln!("processing {}", name);
            name.len()
        }, &path);

        let (result, lines) = capture(|| {
            let len = redirected.call(("name".to_string(),));
            outln!("after");
            len
        });

        assert_eq!(result, 4);
        assert_eq!(lines, vec!["log_redirect: start", "log_redirect: end", "after"]);
        assert_eq!(fs::read_to_string(&path).unwrap(), "processing name\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_append_and_truncate_modes() {
        let path = temp_log();
        let appending = LogRedirect::with_path(|| outln!("again"), &path);
        capture(|| appending.call(()));
        capture(|| appending.call(()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "again\nagain\n");

        let truncating = LogRedirect::with_path(|| outln!("fresh"), &path).mode(OpenMode::Truncate);
        capture(|| truncating.call(()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_sink_is_restored_after_panic() {
        let path = temp_log();
        let redirected = LogRedirect::with_path(|| -> () { panic!("inside redirect") }, &path);

        let ((), lines) = capture(|| {
            let result = std::panic::catch_unwind(|| redirected.call(()));
            assert!(result.is_err());
            outln!("back on console");
        });

        assert_eq!(lines, vec!["log_redirect: start", "back on console"]);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unopenable_file() {
        let path = temp_log().join("missing-dir").join("log.txt");
        let redirected = LogRedirect::with_path(|| outln!("still runs"), &path);

        let err = redirected.try_call(()).unwrap_err();
        assert!(matches!(err, DecoratorError::Redirect { .. }));

        let ((), lines) = capture(|| redirected.call(()));
        assert_eq!(lines, vec!["log_redirect: start", "still runs", "log_redirect: end"]);
    }

    #[test]
    fn test_default_path() {
        let redirected = LogRedirect::new(|| ());
        assert_eq!(redirected.path(), Path::new(DEFAULT_LOG_PATH));
    }
}
