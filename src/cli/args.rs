//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Department/category product catalog with CSV import and an interactive shopping cart
#[derive(Parser, Debug)]
#[command(name = "storecart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Catalog CSV file (overrides configuration)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub catalog: Option<PathBuf>,

    /// Enable debug output (-d, -dd, -ddd for more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the catalog as a tree
    Tree {
        /// Print the plain indented dump instead of the box-drawing tree
        #[arg(long)]
        plain: bool,
    },

    /// List departments
    Departments,

    /// List the categories of a department
    Categories {
        /// Department name
        department: String,
    },

    /// List the products of a category with price and stock
    Products {
        /// Department name
        department: String,
        /// Category name
        category: String,
    },

    /// Find which department and category carry a product
    Locate {
        /// Product name (exact match)
        product: String,
    },

    /// Start an interactive shopping session
    Shop,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create a global config template
    Init,

    /// Show config paths
    Path,
}
