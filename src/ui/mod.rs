//! Terminal front end: list, stats and form over one feedback store.

pub mod app;
pub mod confirm;
pub mod footer;
pub mod form;
pub mod header;
pub mod input;
pub mod layout;
pub mod list;
pub mod popup;
pub mod render;
pub mod runtime;
pub mod stats;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
