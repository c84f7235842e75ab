use crate::catalog::Catalog;
use crate::managers::{ManagerMetadata, OsFamily};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kbt")]
#[command(author, version, about, long_about = None)]
#[command(about = "Install language toolchains through the system package manager")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Install development packages for a programming language
    Install {
        /// Language name, matched case-insensitively (e.g. go, C++, node.js)
        language: String,

        /// Only show what would be done, don't make changes
        #[arg(long)]
        dry_run: bool,
    },

    /// List all supported languages and their installation status
    List {
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Text appended to `--help`: catalog languages and managers per OS
pub fn help_footer(catalog: &Catalog) -> String {
    let mut footer = format!("Supported languages:\n  {}\n\n", catalog.names().join(", "));
    footer.push_str("Package managers automatically detected based on your system:\n");

    for family in [OsFamily::Linux, OsFamily::MacOs, OsFamily::Windows] {
        let managers: Vec<_> = ManagerMetadata::for_family(family)
            .map(|m| m.manager.as_str())
            .collect();
        footer.push_str(&format!(
            "  {}: {}\n",
            family.display_name(),
            managers.join(", ")
        ));
    }

    footer
}
