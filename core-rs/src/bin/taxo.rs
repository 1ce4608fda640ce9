//! taxo - taxonomy inspection CLI
//!
//! Loads a configured taxonomy variant and prints its structure.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use taxonomy_core::{TaxonomyConfig, TaxonomyService, TaxonomyTree};
use tracing::Level;

#[derive(Parser)]
#[command(name = "taxo")]
#[command(version)]
#[command(about = "Inspect RDF-Schema class taxonomies", long_about = None)]
struct Cli {
    /// Taxonomy configuration file (defaults to the built-in logistics taxonomy)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Variant to load (defaults to the configuration's default variant)
    #[arg(long, global = true)]
    variant: Option<String>,

    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show category and property counts
    Stats {
        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },
    /// Look up a category by class name
    Lookup {
        /// Class name (e.g., Location)
        class_name: String,
    },
    /// List root categories
    Roots,
    /// Print the full category tree
    Tree,
    /// List a category's effective properties with their kinds
    Properties {
        /// Class name (e.g., Warehouse)
        class_name: String,
    },
    /// Check whether a class is, or lies below, another class
    IsA {
        /// Class name (e.g., Warehouse)
        class_name: String,
        /// Ancestor class name (e.g., Location)
        ancestor: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => TaxonomyConfig::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => TaxonomyConfig::builtin(),
    };
    let service = TaxonomyService::from_config(&config, cli.variant.as_deref())?;

    match cli.command {
        Commands::Stats { format } => {
            let stats = service.get_stats().context("Failed to load taxonomy")?;
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
                OutputFormat::Table => {
                    println!("Namespace:        {}", service.locator().namespace());
                    println!("Categories:       {}", stats.total_categories);
                    println!("Root categories:  {}", stats.root_categories);
                    println!("Properties:       {}", stats.total_properties);
                    println!("Max depth:        {}", stats.max_depth);
                    println!("Tree id:          {}", stats.tree_id);
                    println!("Loaded at:        {}", stats.loaded_at.to_rfc3339());
                }
            }
        }

        Commands::Lookup { class_name } => {
            let Some(category) = service.get_category_by_class_name(&class_name)? else {
                not_found(&service, &class_name);
            };

            println!("{}", category.class_name());
            println!("  URI:       {}", category.uri());
            println!("  English:   {}", category.english_name());
            if let Some(name) = category.norwegian_name() {
                println!("  Norwegian: {}", name);
            }
            if let Some(description) = category.description() {
                println!("  About:     {}", description);
            }
            match category.parent() {
                Some(parent) => println!("  Parent:    {}", parent.class_name()),
                None => println!("  Parent:    (root)"),
            }
            let children: Vec<_> = category
                .children()
                .iter()
                .map(|c| c.class_name().to_string())
                .collect();
            if !children.is_empty() {
                println!("  Children:  {}", children.join(", "));
            }
            let descendants = category.tree().descendants_of(&category).len();
            println!("  Below:     {} categories", descendants);
        }

        Commands::Roots => {
            let tree = service.load_base_taxonomy()?;
            for root in tree.root_categories() {
                println!("{:<24} {}", root.class_name(), root.english_name());
            }
        }

        Commands::Tree => {
            let tree = service.load_base_taxonomy()?;
            print_tree(&tree);
        }

        Commands::Properties { class_name } => {
            let Some(properties) = service.classify_properties(&class_name)? else {
                not_found(&service, &class_name);
            };

            println!("{:<24} {:<14} {:<20} {}", "NAME", "KIND", "DECLARED ON", "LABEL");
            for (property, kind) in properties {
                println!(
                    "{:<24} {:<14} {:<20} {}",
                    property.name(),
                    kind.as_str(),
                    property.domain_class().unwrap_or("-"),
                    property.display_name()
                );
            }
        }

        Commands::IsA {
            class_name,
            ancestor,
        } => {
            let tree = service.load_base_taxonomy()?;
            if !tree.contains(&class_name) {
                not_found(&service, &class_name);
            }
            if tree.is_subclass_of(&class_name, &ancestor) {
                println!("{} is a {}", class_name, ancestor);
            } else {
                println!("{} is not a {}", class_name, ancestor);
                std::process::exit(2);
            }
        }
    }

    Ok(())
}

fn not_found(service: &TaxonomyService, class_name: &str) -> ! {
    eprintln!(
        "Class \"{}\" not found in {}",
        class_name,
        service.locator().namespace()
    );
    std::process::exit(1);
}

fn print_tree(tree: &TaxonomyTree) {
    for category in tree.walk() {
        let indent = "  ".repeat(tree.depth_of(category));
        println!(
            "{}{} ({} properties)",
            indent,
            category.class_name(),
            category.properties().len()
        );
    }
}
