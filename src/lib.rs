pub mod companion;
pub mod config;
pub mod ipc;
pub mod logging;
pub mod shutdown;
pub mod ui;
