//! Interactive TUI interface

pub mod app;
pub mod rendering;

pub use app::{App, init_file_logging, run_tui};
