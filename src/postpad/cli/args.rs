use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("POSTPAD_GIT_HASH");
    const GIT_DATE: &str = env!("POSTPAD_GIT_DATE");
    const IS_RELEASE: &str = env!("POSTPAD_IS_RELEASE");

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
#[command(name = "postpad", bin_name = "postpad", version = get_version())]
#[command(about = "Write, edit and delete posts kept in a local JSON store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding posts and config
    #[arg(long, global = true, env = "POSTPAD_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List posts, most recently updated first
    #[command(alias = "ls")]
    List {
        /// Print the list as HTML markup
        #[arg(long)]
        html: bool,
    },

    /// Write a new post
    #[command(alias = "n", alias = "create")]
    New {
        /// Title of the post
        title: Option<String>,

        /// Content of the post
        content: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// Edit a post (opens the editor unless fields are given)
    #[command(alias = "e")]
    Edit {
        /// List position (1 = newest) or id prefix
        selector: String,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New content
        #[arg(short, long)]
        content: Option<String>,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// Show a post in full
    #[command(alias = "v")]
    View {
        /// List position (1 = newest) or id prefix
        selector: String,
    },

    /// Delete a post
    #[command(alias = "rm")]
    Delete {
        /// List position (1 = newest) or id prefix
        selector: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, preview-chars, file-ext)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
