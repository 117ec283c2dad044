pub mod app;
pub mod application;
pub mod domain;
pub mod infra;
pub mod utils;

use std::future::Future;
use tokio::runtime::Runtime;

lazy_static::lazy_static! {
    static ref RUNTIME: Runtime = Runtime::new().expect("Failed to create Tokio runtime");
}

pub fn block_on<F: Future>(future: F) -> F::Output {
    RUNTIME.block_on(future)
}

/// Handle to the crate's fallback runtime, for embedders that construct a
/// [`app::FeedApp`] outside any tokio context.
pub fn runtime_handle() -> tokio::runtime::Handle {
    RUNTIME.handle().clone()
}
