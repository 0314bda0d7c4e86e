mod cmd_runner;
mod cmds;
pub mod entry;

pub use cmd_runner::CmdRunner;
