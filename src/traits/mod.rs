pub mod handler;

pub use handler::{DeferredHandler, ImmediateHandler};
