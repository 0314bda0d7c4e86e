pub mod call;
pub mod repl;
