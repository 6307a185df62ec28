//! Interactive command shell

pub mod command;
pub mod repl;

pub use command::ShellCommand;
pub use repl::Shell;
