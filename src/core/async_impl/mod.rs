//! Background dispatch.
//!
//! - [`AsyncDispatch`] runs its inner unit on a dedicated thread and owns that
//!   task until it is joined, either right away (autojoin) or later through
//!   [`AsyncDispatch::join`] / [`AsyncDispatch::join_async`].

pub mod async_dispatch;

pub use async_dispatch::{AsyncDispatch, TaskState, DEFAULT_AUTOJOIN};
