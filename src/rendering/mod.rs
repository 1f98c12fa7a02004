//! Output backends for formatted references and rendered passages

mod terminal;

pub use terminal::Terminal;
