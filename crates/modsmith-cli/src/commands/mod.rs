//! One module per subcommand. Each exposes an `execute` function that
//! `main::run` dispatches to.

pub mod compile;
pub mod completions;
pub mod config;
pub mod init;
pub mod versions;
