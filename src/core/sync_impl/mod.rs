//! Decorators that run entirely on the calling thread.
//!
//! - [`Trace`] prints the argument list before and after the call
//! - [`PrintResult`] prints what the call returned
//! - [`ExceptionGuard`] turns panics into a logged default result
//! - [`Timing`] prints how long the call took
//! - [`Timestamp`] prints the local time the call started
//! - [`LogRedirect`] sends the call's console output to a file
//! - [`Custom`] runs a before hook and an after hook around the call

pub mod custom;
pub mod exception_guard;
pub mod log_redirect;
pub mod print_result;
pub mod timestamp;
pub mod timing;
pub mod trace;

pub use custom::Custom;
pub use exception_guard::ExceptionGuard;
pub use log_redirect::LogRedirect;
pub use print_result::PrintResult;
pub use timestamp::Timestamp;
pub use timing::Timing;
pub use trace::Trace;
