//! Feedback board: a client-side store of rated reviews kept in sync with a
//! remote `/feedback` collection, with a terminal UI and a local endpoint.

pub mod cli;
pub mod config;
pub mod feedback;
pub mod logging;
pub mod mvi;
pub mod remote;
pub mod server;
pub mod store;
pub mod ui;
