/// Host adapters for the command line
pub mod terminal;

pub use terminal::{OpenMode, SystemClock, TerminalNotifier, TerminalWorkspace};
