//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, CursorMove, Message, MessageStyle, Screen, run_tui};
