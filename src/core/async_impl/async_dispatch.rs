use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};

use uuid::Uuid;

use crate::core::console;
use crate::core::error::{panic_message, DecoratorError};
use crate::core::{Adapter, Invocable};

const NAME: &str = "async_dispatch";

/// Whether a call blocks until its task finishes unless configured otherwise.
pub const DEFAULT_AUTOJOIN: bool = true;

/// Lifecycle of the task owned by an [`AsyncDispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// No task, a new call may be dispatched.
    Idle,
    /// A task was started and has not been joined yet. It may already have
    /// finished running.
    Running(Uuid),
}

struct Task {
    id: Uuid,
    handle: JoinHandle<()>,
}

impl Task {
    fn wait(self) -> Result<(), DecoratorError> {
        let id = self.id;
        self.handle
            .join()
            .map_err(|payload| DecoratorError::TaskPanicked {
                id,
                message: panic_message(&*payload),
            })
    }
}

/// Runs the inner unit on a background thread.
///
/// The decorator owns at most one task at a time. Dispatching again before the
/// previous task was joined is refused with [`DecoratorError::TaskInFlight`].
/// With autojoin on (the default) every call waits for its own task, so the
/// decorator is always idle again when `call` returns.
///
/// Only units that return nothing can be dispatched. The console sink current
/// on the calling thread is carried over to the task, so output from the
/// background thread lands in the same place.
///
/// A panic inside the task is reported by [`join`](AsyncDispatch::join) as
/// [`DecoratorError::TaskPanicked`]. Dropping the decorator while it still owns
/// a task waits for that task, and a panic from that unjoined task is raised
/// again on the dropping thread.
pub struct AsyncDispatch<U> {
    inner: Arc<Adapter<U>>,
    autojoin: bool,
    task: Mutex<Option<Task>>,
}

impl<U> AsyncDispatch<U> {
    pub fn new(unit: U) -> Self {
        AsyncDispatch {
            inner: Arc::new(Adapter::new(unit)),
            autojoin: DEFAULT_AUTOJOIN,
            task: Mutex::new(None),
        }
    }

    pub fn autojoin(mut self, autojoin: bool) -> Self {
        self.autojoin = autojoin;
        self
    }

    pub fn is_autojoin(&self) -> bool {
        self.autojoin
    }

    pub fn state(&self) -> TaskState {
        match self.slot().as_ref() {
            Some(task) => TaskState::Running(task.id),
            None => TaskState::Idle,
        }
    }

    /// True when the owned task has stopped running. Idle counts as finished.
    pub fn is_finished(&self) -> bool {
        self.slot()
            .as_ref()
            .is_none_or(|task| task.handle.is_finished())
    }

    /// Blocks until the owned task completes. Joining while idle is a no-op.
    pub fn join(&self) -> Result<(), DecoratorError> {
        let task = self.slot().take();
        match task {
            Some(task) => {
                log::debug!("{NAME}: joining task {}", task.id);
                task.wait()
            }
            None => {
                log::debug!("{NAME}: join called with no task in flight");
                Ok(())
            }
        }
    }

    /// Waits for the owned task from inside a tokio runtime without blocking
    /// its worker threads.
    pub async fn join_async(&self) -> Result<(), DecoratorError> {
        let task = self.slot().take();
        let Some(task) = task else {
            return Ok(());
        };
        let id = task.id;
        tokio::task::spawn_blocking(move || task.wait())
            .await
            .map_err(|err| DecoratorError::Join {
                id,
                reason: err.to_string(),
            })?
    }

    fn slot(&self) -> MutexGuard<'_, Option<Task>> {
        // The slot is only ever swapped whole, so a poisoned lock holds a
        // consistent value.
        self.task.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<U> AsyncDispatch<U>
where
    U: Send + Sync + 'static,
{
    /// Starts a task for `args`, joining it right away when autojoin is on.
    pub fn try_call<Args>(&self, args: Args) -> Result<(), DecoratorError>
    where
        U: Invocable<Args, Output = ()>,
        Args: Send + 'static,
    {
        {
            let mut slot = self.slot();
            if let Some(task) = slot.as_ref() {
                return Err(DecoratorError::TaskInFlight { id: task.id });
            }

            let id = Uuid::new_v4();
            let inner = Arc::clone(&self.inner);
            let sink = console::current();
            let handle = thread::Builder::new()
                .name(format!("decorum-{id}"))
                .spawn(move || {
                    let _guard = console::install(sink);
                    let current = thread::current();
                    console::emit(format!(
                        "{NAME}: task started on thread: [{}]",
                        current.name().unwrap_or("unnamed")
                    ));
                    Invocable::call(&*inner, args);
                })
                .map_err(DecoratorError::Spawn)?;

            log::debug!("{NAME}: dispatched task {id}");
            *slot = Some(Task { id, handle });
        }

        if self.autojoin {
            self.join()?;
        }
        Ok(())
    }
}

impl<Args, U> Invocable<Args> for AsyncDispatch<U>
where
    U: Invocable<Args, Output = ()> + Send + Sync + 'static,
    Args: Send + 'static,
{
    type Output = ();

    /// Misuse and task failures surface as a panic on the calling thread, so
    /// an enclosing [`ExceptionGuard`](crate::ExceptionGuard) sees them like any
    /// other failure.
    fn call(&self, args: Args) {
        if let Err(err) = self.try_call(args) {
            log::error!("{NAME}: {err}");
            panic!("{err}");
        }
    }
}

impl<U> Drop for AsyncDispatch<U> {
    fn drop(&mut self) {
        let task = self
            .task
            .get_mut()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();
        if let Some(task) = task {
            log::warn!("{NAME}: dropped with task {} still owned, waiting for it", task.id);
            if let Err(err) = task.wait() {
                log::error!("{NAME}: {err}");
                // Panicking while already unwinding would abort the process.
                if !thread::panicking() {
                    panic!("{err}");
                }
            }
        }
    }
}
