use std::path::PathBuf;

use clap::Parser;

/// Print the contents of each FILE to standard output, in order.
///
/// Every argument is a file name, including ones that start with `-`.
#[derive(Parser, Debug)]
#[command(name = "badcat", disable_help_flag = true, disable_version_flag = true)]
pub struct Config {
    /// Files to print
    #[arg(
        value_name = "FILE",
        required = true,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub paths: Vec<PathBuf>,
}
