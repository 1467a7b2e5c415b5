use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "wayfind")]
#[command(author, version, about)]
#[command(long_about = "In-store wayfinding from the terminal.\n\n\
    Search for a product and get a route across the store map with\n\
    turn-by-turn directions.\n\n\
    Examples:\n  \
    wayfind find milk            Route from the entrance to the milk\n  \
    wayfind find bread --at 90,110   Route from the node nearest (90,110)\n  \
    wayfind map --route milk     Draw the store map with a route overlaid\n  \
    wayfind products             List everything in the catalog")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find a product and print the route and directions
    Find {
        /// Product name (case-insensitive, exact match)
        product: String,

        /// Start from a named map node instead of the default start
        #[arg(long, conflicts_with = "at")]
        from: Option<String>,

        /// Start from the node nearest this map point, e.g. --at 90,110
        #[arg(long, value_name = "X,Y")]
        at: Option<String>,

        /// Print the animated marker trace after the directions
        #[arg(long)]
        animate: bool,

        /// Print the route in compact notation (entrance->a1->...)
        #[arg(long)]
        notation: bool,
    },

    /// List all products in the catalog
    Products,

    /// Draw the store map, optionally with a route overlaid
    Map {
        /// Product to overlay a route for
        #[arg(long, value_name = "PRODUCT")]
        route: Option<String>,

        /// Explicit route in compact notation, e.g. entrance->a1->b1
        #[arg(long, value_name = "NOTATION", conflicts_with = "route")]
        path: Option<String>,
    },

    /// Show the map node nearest to a point
    Nearest {
        /// X coordinate in map pixels
        x: i32,

        /// Y coordinate in map pixels
        y: i32,
    },

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.start)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        if self.no_color {
            colored::control::set_override(false);
        }
        if self.verbose > 0 {
            eprintln!("wayfind {}", env!("CARGO_PKG_VERSION"));
        }

        match self.command {
            Commands::Find {
                product,
                from,
                at,
                animate,
                notation,
            } => crate::commands::find::run(
                &product,
                from.as_deref(),
                at.as_deref(),
                animate,
                notation,
                self.quiet,
            ),
            Commands::Products => {
                crate::commands::products::run();
                Ok(())
            }
            Commands::Map { route, path } => {
                crate::commands::map::run(route.as_deref(), path.as_deref(), self.quiet)
            }
            Commands::Nearest { x, y } => {
                crate::commands::nearest::run(x, y);
                Ok(())
            }
            Commands::Config { command } => crate::commands::config::run(command),
            Commands::Completion { shell } => {
                crate::commands::completion::run(shell);
                Ok(())
            }
        }
    }
}
