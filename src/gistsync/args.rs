use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gistsync")]
#[command(about = "Keep local files in sync with GitHub gists", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Files to sync (shorthand for `gistsync sync <files>`)
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,

    /// Gist tool to invoke (overrides config)
    #[arg(short, long, global = true, value_name = "BIN")]
    pub tool: Option<String>,

    /// Dotfolder holding the id sidecars (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub id_dir: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sync files: update tracked ones, create gists for new ones
    #[command(alias = "s")]
    Sync {
        /// Files to sync
        #[arg(required = true, num_args = 1.., value_name = "FILE")]
        files: Vec<String>,
    },

    /// List tracked files and their remote ids
    #[command(alias = "st")]
    Status,

    /// Get or set configuration (keys: tool, id-dir)
    Config {
        /// Configuration key (e.g., tool)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
