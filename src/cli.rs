use clap::{Parser, Subcommand};

/// FerretBlend, a raw-feeding CLI that blends ingredients to hit target
/// muscle/organ/heart/bone ratios.
#[derive(Parser, Debug)]
#[command(name = "ferret_blend")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the blend problem JSON file.
    #[arg(short, long, default_value = "blend.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve the blend problem and display ingredient quantities.
    Solve {
        /// Write the solved blend to a JSON file.
        #[arg(long)]
        output: Option<String>,

        /// Export per-ingredient quantities to a CSV file.
        #[arg(long)]
        csv: Option<String>,

        /// Build the problem interactively instead of reading the file.
        #[arg(short, long)]
        interactive: bool,
    },

    /// Validate the problem file without solving.
    Check,

    /// Write a starter problem file with a feasible example.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Solve {
            output: None,
            csv: None,
            interactive: false,
        }
    }
}
