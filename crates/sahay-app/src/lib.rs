//! sahay-app
//!
//! The application layer a UI shell drives: the durable
//! conversation/settings store, the chat session flow, history search, and
//! transcript export. The store is constructed explicitly with injected
//! storage — there is no process-wide singleton.

pub mod error;
pub mod export;
pub mod search;
pub mod session;
pub mod store;

pub use error::AppError;
pub use store::AppStore;
