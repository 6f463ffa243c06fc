//! Interactive terminal front end.
//!
//! [`App`] wraps a [`SearchWidget`](crate::widget::SearchWidget): key handling
//! lives in `actions`, drawing in `render`, and the event loop in `runtime`.
//! The app subscribes to widget notifications and only redraws after a
//! change, a resize or a key press that moved the cursor.

mod actions;
mod config;
pub mod input;
mod render;
mod runtime;
mod state;
pub mod theme;

pub use config::UiConfig;
pub use runtime::run;
pub use state::{App, Focus};
