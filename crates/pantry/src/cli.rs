//! Command line interface
//!
//! Every invocation loads the configuration, mounts a controller, performs
//! one action and prints the rows visible afterwards.

use anyhow::Context;
use clap::{Parser, Subcommand};
use pantry_application::use_cases::InventoryController;
use pantry_domain::entities::{Category, InventoryItem};
use pantry_infrastructure::bootstrap::build_controller;
use pantry_infrastructure::config::ConfigLoader;
use pantry_infrastructure::logging::init_logging;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Command line interface for Pantry
#[derive(Parser, Debug)]
#[command(name = "pantry")]
#[command(about = "Pantry - household inventory tracker")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Action to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Inventory actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the inventory, optionally filtered by name
    List {
        /// Case-insensitive substring of the item name
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Add an item, or add one unit if it already exists
    Add {
        /// Item name
        name: String,
        /// Category (Baking, Beverage, Spices, Snacks, Sauce, Fruits, Vegetables)
        #[arg(long)]
        category: Option<Category>,
        /// Free-text description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Add one unit
    Inc {
        /// Item name
        name: String,
    },
    /// Take one unit away
    Dec {
        /// Item name
        name: String,
    },
    /// Remove the item entirely
    Remove {
        /// Item name
        name: String,
    },
    /// List the available categories
    Categories,
}

/// Load configuration, set up logging and run one command
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    if cli.command == Command::Categories {
        print!("{}", render_categories());
        return Ok(());
    }

    let mut controller = build_controller(&config)
        .await
        .context("Failed to open inventory store")?;
    controller
        .mount()
        .await
        .context("Failed to load inventory")?;
    dispatch(&mut controller, cli.command).await?;

    print!("{}", render_items(controller.visible()));
    Ok(())
}

/// Apply one command to a mounted controller
pub async fn dispatch(controller: &mut InventoryController, command: Command) -> anyhow::Result<()> {
    match command {
        Command::List { search } => {
            controller.set_query(search.unwrap_or_default());
        }
        Command::Add {
            name,
            category,
            description,
        } => controller
            .submit_new_item(&name, category, &description)
            .await
            .with_context(|| format!("Failed to add {name:?}"))?,
        Command::Inc { name } => controller
            .increment(&name)
            .await
            .with_context(|| format!("Failed to increment {name:?}"))?,
        Command::Dec { name } => controller
            .decrement(&name)
            .await
            .with_context(|| format!("Failed to decrement {name:?}"))?,
        Command::Remove { name } => controller
            .remove(&name)
            .await
            .with_context(|| format!("Failed to remove {name:?}"))?,
        Command::Categories => {}
    }
    Ok(())
}

/// Format inventory rows as an aligned table
pub fn render_items(items: &[InventoryItem]) -> String {
    if items.is_empty() {
        return "No items.\n".to_string();
    }

    let names: Vec<String> = items.iter().map(InventoryItem::display_name).collect();
    let width = names
        .iter()
        .map(|n| n.chars().count())
        .max()
        .unwrap_or_default()
        .max("Name".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:<width$}  {:>8}  {:<10}  Description", "Name", "Quantity", "Category");
    for (item, name) in items.iter().zip(names) {
        let category = item.category.map(Category::as_str).unwrap_or("-");
        let _ = writeln!(
            out,
            "{name:<width$}  {:>8}  {category:<10}  {}",
            item.quantity, item.description
        );
    }
    out
}

/// One category label per line
pub fn render_categories() -> String {
    Category::ALL
        .iter()
        .map(|c| format!("{c}\n"))
        .collect()
}
