use clap::{Parser, Subcommand};

/// "0.3.2" for releases, "0.3.2@abc1234 2024-01-15" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("HARPS_GIT_HASH");
    const GIT_DATE: &str = env!("HARPS_GIT_DATE");
    const IS_RELEASE: &str = env!("HARPS_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "harps", bin_name = "harps", version = get_version())]
#[command(about = "Park searches in single-character registers and replay them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log pipeline steps to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Flags shared by the two set commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OffsetFlags {
    /// Treat a trailing `/e` or `?e` in the pattern as an end-of-match offset
    #[arg(long)]
    pub infer_offset: bool,

    /// Read an explicit offset from stdin (EOF cancels, empty line means none)
    #[arg(long)]
    pub ask_offset: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store a search for the current buffer
    #[command(alias = "s")]
    Set {
        /// Register (one character)
        register: String,

        /// Search pattern, usually the editor's last search
        pattern: String,

        #[command(flatten)]
        offset: OffsetFlags,
    },

    /// Print the search stored in a register
    #[command(alias = "g")]
    Get {
        /// Register (one character)
        register: String,

        /// Compile as a backward (`?`) search
        #[arg(short, long)]
        backwards: bool,
    },

    /// Store a search together with the file it belongs to
    #[command(alias = "sg")]
    SetGlobal {
        /// Register (one character)
        register: String,

        /// File the search belongs to
        path: String,

        /// Search pattern
        pattern: String,

        #[command(flatten)]
        offset: OffsetFlags,
    },

    /// Print the file and search stored in a global register
    #[command(alias = "gg")]
    GetGlobal {
        /// Register (one character)
        register: String,

        /// Compile as a backward (`?`) search
        #[arg(short, long)]
        backwards: bool,
    },

    /// List stored harps
    #[command(alias = "ls")]
    List {
        /// List global searches instead of buffer searches
        #[arg(short, long)]
        global: bool,
    },

    /// Remove one or more harps
    #[command(alias = "rm")]
    Clear {
        /// Operate on global searches
        #[arg(short, long)]
        global: bool,

        /// Registers to clear
        #[arg(required = true, num_args = 1..)]
        registers: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (infer-offset, ask-offset)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_set_with_flags() {
        let cli = Cli::parse_from(["harps", "set", "a", "foo/e", "--infer-offset"]);
        match cli.command {
            Commands::Set {
                register,
                pattern,
                offset,
            } => {
                assert_eq!(register, "a");
                assert_eq!(pattern, "foo/e");
                assert!(offset.infer_offset);
                assert!(!offset.ask_offset);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_get_global_backwards_alias() {
        let cli = Cli::parse_from(["harps", "gg", "q", "-b", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::GetGlobal { ref register, backwards: true } if register == "q"
        ));
    }

    #[test]
    fn clear_requires_registers() {
        assert!(Cli::try_parse_from(["harps", "clear"]).is_err());
    }

    #[test]
    fn patterns_may_start_with_a_dash_after_separator() {
        let cli = Cli::parse_from(["harps", "set", "a", "--", "-> x"]);
        assert!(matches!(cli.command, Commands::Set { ref pattern, .. } if pattern == "-> x"));
    }
}
