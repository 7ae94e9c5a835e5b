use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

pub const INSTALL_EXAMPLES: &str = "Examples:
  Add a new dependency:
  boss install <pkg>

  Add a new version-specific dependency:
  boss install <pkg>@<version>

  Install a dependency without adding it to the boss.json file:
  boss install <pkg> --no-save";

pub const UNINSTALL_EXAMPLES: &str = "Examples:
  Uninstall a package:
  boss uninstall <pkg>

  Uninstall a package without removing it from the boss.json file:
  boss uninstall <pkg> --no-save";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Dependency manager for Delphi and Lazarus projects",
    disable_help_subcommand = true
)]
pub struct BossCli {
    #[arg(
        short,
        long,
        help = "Suppress human output (errors still print to stderr)",
        global = true
    )]
    pub quiet: bool,
    #[arg(short, long, action = ArgAction::Count, help = "Increase logging (-vv reaches trace)")]
    pub verbose: u8,
    #[arg(long, help = "Force trace logging regardless of -v/-q", global = true)]
    pub trace: bool,
    #[arg(
        long,
        help = "Emit {status,message,details} JSON envelopes",
        global = true
    )]
    pub json: bool,
    #[arg(
        short,
        long,
        value_name = "DIR",
        help = "Operate on the boss.json in DIR instead of the current directory",
        global = true
    )]
    pub dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: BossCommand,
}

#[derive(Subcommand, Debug)]
pub enum BossCommand {
    #[command(
        about = "Install a new dependency",
        visible_aliases = ["i", "add"],
        after_help = INSTALL_EXAMPLES
    )]
    Install(PackageArgs),
    #[command(
        about = "Uninstall a dependency",
        long_about = "This uninstalls a package, completely removing everything boss installed on its behalf",
        visible_aliases = ["remove", "rm", "r", "un", "unlink"],
        after_help = UNINSTALL_EXAMPLES
    )]
    Uninstall(PackageArgs),
}

#[derive(Args, Debug)]
pub struct PackageArgs {
    #[arg(
        value_name = "PKG",
        help = "Dependency specifiers (<pkg>, <pkg>@<version>, org/<pkg>, host/org/<pkg>)"
    )]
    pub packages: Vec<String>,
    #[arg(long = "no-save", help = "Prevents saving to `dependencies`")]
    pub no_save: bool,
}
