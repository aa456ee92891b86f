//! Command dispatch for the storecart CLI

use std::io;
use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::import;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::{output, shop, view};
use crate::config::{self, Settings};
use crate::domain::CatalogTree;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Tree { plain }) => _tree(cli, *plain),
        Some(Commands::Departments) => _departments(cli),
        Some(Commands::Categories { department }) => _categories(cli, department),
        Some(Commands::Products {
            department,
            category,
        }) => _products(cli, department, category),
        Some(Commands::Locate { product }) => _locate(cli, product),
        Some(Commands::Shop) => _shop(cli),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(),
            ConfigCommands::Init => _config_init(),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

/// Resolve the catalog path: the CLI flag wins over settings.
fn catalog_path(cli: &Cli) -> CliResult<PathBuf> {
    if let Some(path) = &cli.catalog {
        return Ok(path.clone());
    }
    let settings = Settings::load()?;
    Ok(settings.catalog)
}

fn load_catalog(cli: &Cli) -> CliResult<CatalogTree> {
    let path = catalog_path(cli)?;
    debug!("catalog path: {}", path.display());
    Ok(import::load_catalog(&path)?)
}

#[instrument(skip(cli))]
fn _tree(cli: &Cli, plain: bool) -> CliResult<()> {
    let catalog = load_catalog(cli)?;
    if plain {
        print!("{}", catalog.render());
    } else {
        print!("{}", view::display_tree(&catalog));
    }
    output::detail(&format!(
        "{} products in {} departments, depth {}",
        catalog.product_count(),
        catalog.departments().len(),
        catalog.depth()
    ));
    Ok(())
}

#[instrument(skip(cli))]
fn _departments(cli: &Cli) -> CliResult<()> {
    let catalog = load_catalog(cli)?;
    for department in catalog.departments() {
        output::info(&department);
    }
    Ok(())
}

#[instrument(skip(cli))]
fn _categories(cli: &Cli, department: &str) -> CliResult<()> {
    let mut catalog = load_catalog(cli)?;
    for category in catalog.categories(department) {
        output::info(&category);
    }
    Ok(())
}

#[instrument(skip(cli))]
fn _products(cli: &Cli, department: &str, category: &str) -> CliResult<()> {
    let mut catalog = load_catalog(cli)?;
    for (name, record) in catalog.products(department, category) {
        output::info(&format!(
            "{:<24} {:>12} {:>6} in stock",
            name,
            format!("${:.2}", record.price),
            record.quantity
        ));
    }
    Ok(())
}

#[instrument(skip(cli))]
fn _locate(cli: &Cli, product: &str) -> CliResult<()> {
    let catalog = load_catalog(cli)?;
    match catalog.locate(product) {
        Some(found) => {
            output::info(&format!(
                "{} / {} / {}",
                found.department, found.category, product
            ));
            output::detail(&format!(
                "${:.2}, {} in stock",
                found.record.price, found.record.quantity
            ));
        }
        None => output::warning(&format!("{product} not found in the inventory")),
    }
    Ok(())
}

#[instrument(skip(cli))]
fn _shop(cli: &Cli) -> CliResult<()> {
    let catalog = load_catalog(cli)?;
    shop::run(catalog)
}

fn _config_show() -> CliResult<()> {
    let settings = Settings::load()?;
    print!("{}", settings.to_toml()?);
    Ok(())
}

fn _config_init() -> CliResult<()> {
    let Some(path) = config::global_config_path() else {
        return Err(CliError::Usage(
            "cannot determine config directory".to_string(),
        ));
    };
    if path.exists() {
        output::warning(&format!("config already exists: {}", path.display()));
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, Settings::template())?;
    output::success(&format!("created {}", path.display()));
    Ok(())
}

fn _config_path() -> CliResult<()> {
    match config::global_config_path() {
        Some(path) => {
            let marker = if path.exists() { "" } else { " (not created)" };
            output::info(&format!("{}{}", path.display(), marker));
        }
        None => output::warning("cannot determine config directory"),
    }
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
