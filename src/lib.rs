//! # Decorum
//!
//! Composable decorators for plain Rust callables: wrap a closure, fn item or
//! any [`Invocable`] in tracing, result reporting, panic containment, timing,
//! timestamps, output redirection or background dispatch, without touching its
//! signature. Every decorator is itself an [`Invocable`], so they nest freely.
//!
//! ## Features
//!
//! - **Signature Preserving**: a decorated unit takes the same arguments and returns the same type
//! - **Shape Aware**: units returning `()` and units returning a value are reported differently
//! - **Scoped Output**: redirection is per thread and always undone, even on panic
//! - **Explicit Failures**: `try_call` variants hand back a [`DecoratorError`] instead of hiding it
//! - **Background Dispatch**: one owned task per [`AsyncDispatch`], joined on demand
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use decorum::prelude::*;
//!
//! let greet = Trace::new(ExceptionGuard::new(|n: usize, name: &str| {
//!     for _ in 0..n {
//!         outln!("Hello {}", name);
//!     }
//! }));
//!
//! greet.call((3usize, "name"));
//! ```
//!
//! ## Module Organization
//!
//! - [`console`]: the per-thread output stream decorators write to
//! - [`sync`]: decorators that run on the calling thread
//! - [`async_impl`]: background dispatch
//! - [`prelude`]: everything, import with `use decorum::prelude::*`

// ============================================================================
// Core Module
// ============================================================================

mod core;

// ============================================================================
// Public Re-exports - Granular Imports
// ============================================================================

// Core types
pub use crate::core::args::ArgList;
pub use crate::core::console;
pub use crate::core::decorate::Decorate;
pub use crate::core::error::DecoratorError;
pub use crate::core::layer::{
    AsyncDispatchLayer, ExceptionGuardLayer, HooksLayer, Layer, LayerExt, LogRedirectLayer,
    PrintResultLayer, Stack, TimestampLayer, TimingLayer, TraceLayer,
};
pub use crate::core::shape::{Returns, Shape, ShapeTag};
pub use crate::core::{Adapter, Invocable, Noop};

// Calling-thread decorators
pub use crate::core::sync_impl as sync;
pub use crate::core::sync_impl::custom::custom;
pub use crate::core::sync_impl::log_redirect::DEFAULT_LOG_PATH;
pub use crate::core::sync_impl::timestamp::TIMESTAMP_FORMAT;
pub use crate::core::sync_impl::{
    Custom, ExceptionGuard, LogRedirect, PrintResult, Timestamp, Timing, Trace,
};

// Background dispatch
pub use crate::core::async_impl;
pub use crate::core::async_impl::{AsyncDispatch, TaskState, DEFAULT_AUTOJOIN};

// ============================================================================
// Prelude Module - Convenient Bulk Imports
// ============================================================================

/// Imports every decorator, the composition traits and the `outln!` macro.
///
/// # Example
/// ```rust
/// use decorum::prelude::*;
/// ```
pub mod prelude {
    pub use super::{
        custom,
        outln,
        ArgList,
        // Dispatch
        AsyncDispatch,
        AsyncDispatchLayer,
        Custom,
        // Composition
        Decorate,
        DecoratorError,
        ExceptionGuard,
        ExceptionGuardLayer,
        HooksLayer,
        // Core
        Invocable,
        Layer,
        LayerExt,
        LogRedirect,
        LogRedirectLayer,
        Noop,
        PrintResult,
        PrintResultLayer,
        Returns,
        TaskState,
        Timestamp,
        TimestampLayer,
        Timing,
        TimingLayer,
        Trace,
        TraceLayer,
    };
    pub use crate::console::OpenMode;
}

// ============================================================================
// Library Metadata
// ============================================================================

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of this crate.
pub const NAME: &str = env!("CARGO_PKG_NAME");
