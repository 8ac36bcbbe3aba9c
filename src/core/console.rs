//! The console stream decorators write their status lines to.
//!
//! Each thread has its own current [`Sink`], stdout unless something else was
//! installed. Redirecting output is done by installing a different sink for a
//! scope; the returned [`SinkGuard`] puts the previous one back when it drops,
//! unwinding included. Nothing here is process-global, so redirect scopes on
//! different threads never see each other.

use std::cell::RefCell;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

/// How a file sink opens its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenMode {
    /// Keep existing content and write at the end.
    #[default]
    Append,
    /// Start from an empty file.
    Truncate,
}

/// A shareable line-oriented output destination.
#[derive(Clone)]
pub struct Sink {
    label: Arc<str>,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("label", &self.label).finish()
    }
}

impl Sink {
    pub fn stdout() -> Self {
        Sink::from_writer("stdout", io::stdout())
    }

    pub fn stderr() -> Self {
        Sink::from_writer("stderr", io::stderr())
    }

    /// Wraps any writer. The label only shows up in diagnostics.
    pub fn from_writer<W>(label: &str, writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Sink {
            label: Arc::from(label),
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Opens `path` for writing, creating it if needed.
    pub fn file(path: impl AsRef<Path>, mode: OpenMode) -> io::Result<Self> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            OpenMode::Append => options.append(true),
            OpenMode::Truncate => options.write(true).truncate(true),
        };
        let file: File = options.open(path)?;
        Ok(Sink::from_writer(&path.display().to_string(), file))
    }

    /// An in-memory sink plus the buffer it fills.
    pub fn memory() -> (Self, MemoryBuffer) {
        let buffer = MemoryBuffer::default();
        (Sink::from_writer("memory", buffer.clone()), buffer)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether both handles point at the same destination.
    pub fn same_as(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }

    /// Writes `line` followed by a newline and flushes.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = lock(&self.writer);
        writeln!(writer, "{}", line)?;
        writer.flush()
    }
}

/// Growable byte buffer behind [`Sink::memory`].
#[derive(Clone, Default)]
pub struct MemoryBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&lock(&self.bytes)).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for MemoryBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        lock(&self.bytes).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// A panic elsewhere never leaves the buffers half-written, so a poisoned lock
// is still usable.
fn lock<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

thread_local! {
    static CURRENT: RefCell<Sink> = RefCell::new(Sink::stdout());
}

/// The calling thread's current sink.
pub fn current() -> Sink {
    CURRENT.with(|sink| sink.borrow().clone())
}

/// Makes `sink` current on this thread until the guard drops.
#[must_use = "the previous sink comes back as soon as the guard is dropped"]
pub fn install(sink: Sink) -> SinkGuard {
    let previous = CURRENT.with(|current| current.replace(sink));
    log::debug!("console sink switched from {}", previous.label());
    SinkGuard {
        previous: Some(previous),
    }
}

/// Restores the sink that was current before [`install`].
pub struct SinkGuard {
    previous: Option<Sink>,
}

impl Drop for SinkGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            log::debug!("console sink restored to {}", previous.label());
            CURRENT.with(|current| current.replace(previous));
        }
    }
}

/// Writes one line to the current sink.
///
/// Write failures are logged rather than raised; a status line is never worth
/// failing the wrapped call for.
pub fn emit(line: impl AsRef<str>) {
    let sink = current();
    if let Err(err) = sink.write_line(line.as_ref()) {
        log::warn!("failed to write to console sink {}: {}", sink.label(), err);
    }
}

/// Runs `f` with an in-memory sink and returns its result and every line it
/// produced, including lines from background tasks it joined.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<String>) {
    let (sink, buffer) = Sink::memory();
    let result = {
        let _guard = install(sink);
        f()
    };
    (result, buffer.lines())
}

/// `println!` for the current console sink.
#[macro_export]
macro_rules! outln {
    () => {
        $crate::console::emit("")
    };
    ($($arg:tt)*) => {
        $crate::console::emit(::std::format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic;

    #[test]
    fn test_capture_collects_lines_in_order() {
        let ((), lines) = capture(|| {
            emit("first");
            crate::outln!("second {}", 2);
        });
        assert_eq!(lines, vec!["first", "second 2"]);
    }

    #[test]
    fn test_guard_restores_previous_sink() {
        let before = current();
        let (sink, buffer) = Sink::memory();
        {
            let _guard = install(sink.clone());
            assert!(current().same_as(&sink));
            emit("inside");
        }
        assert!(current().same_as(&before));
        assert_eq!(buffer.lines(), vec!["inside"]);
    }

    #[test]
    fn test_guard_restores_on_panic() {
        let before = current();
        let result = panic::catch_unwind(|| {
            let (sink, _buffer) = Sink::memory();
            let _guard = install(sink);
            panic!("boom");
        });
        assert!(result.is_err());
        assert!(current().same_as(&before));
    }

    #[test]
    fn test_nested_installs_unwind_in_order() {
        let ((), outer) = capture(|| {
            emit("outer-1");
            let ((), inner) = capture(|| emit("inner"));
            assert_eq!(inner, vec!["inner"]);
            emit("outer-2");
        });
        assert_eq!(outer, vec!["outer-1", "outer-2"]);
    }

    #[test]
    fn test_sinks_are_per_thread() {
        let ((), lines) = capture(|| {
            let handle = std::thread::spawn(|| {
                let ((), theirs) = capture(|| emit("theirs"));
                theirs
            });
            emit("ours");
            let theirs = handle.join().expect("thread should not panic");
            assert_eq!(theirs, vec!["theirs"]);
        });
        assert_eq!(lines, vec!["ours"]);
    }

    #[test]
    fn test_file_sink_modes() {
        let path = std::env::temp_dir().join(format!("decorum-sink-{}.txt", uuid::Uuid::new_v4()));

        Sink::file(&path, OpenMode::Append).unwrap().write_line("one").unwrap();
        Sink::file(&path, OpenMode::Append).unwrap().write_line("two").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\ntwo\n");

        Sink::file(&path, OpenMode::Truncate).unwrap().write_line("three").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "three\n");

        std::fs::remove_file(&path).unwrap();
    }
}
