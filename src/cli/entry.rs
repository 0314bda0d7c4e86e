use clap::{Parser, Subcommand};

use super::cmds::{call, repl};

/// hello endpoint caller commands
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Holler {
    #[command(subcommand)]
    pub cmd: HollerCmd,
}

#[derive(Clone, Subcommand)]
pub enum HollerCmd {
    /// Click once and print the rendered message
    Call(call::Cmd),
    /// Interactive mode: every line of input is one click
    Repl(repl::Cmd),
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Holler, HollerCmd};

    #[test]
    fn parses_call_with_defaults() {
        let args = Holler::parse_from(["holler", "call"]);
        let HollerCmd::Call(cmd) = args.cmd else {
            panic!("expected call subcommand");
        };
        assert_eq!(cmd.url, "http://localhost:5000");
        assert_eq!(cmd.name, None);
        assert!(!cmd.latest_only);
    }

    #[test]
    fn parses_repl_with_name_variant() {
        let args = Holler::parse_from(["holler", "repl", "--name", "User", "--latest-only"]);
        let HollerCmd::Repl(cmd) = args.cmd else {
            panic!("expected repl subcommand");
        };
        assert_eq!(cmd.name.as_deref(), Some("User"));
        assert!(cmd.latest_only);
    }
}
