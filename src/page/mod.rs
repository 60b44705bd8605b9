//! Shared page state.

/// Document and language context behind async locks
mod state;

pub use state::PageState;
