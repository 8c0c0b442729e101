mod shopping;

use alacena_core::{
    combine, convert_with, parse_quantity, scale, step_quantity, ConversionOptions, EngineConfig,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "alacena")]
#[command(about = "Parse, convert, scale and merge recipe quantities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a quantity string and print it as JSON
    Parse {
        /// Quantity text, e.g. "1 ½ taza"
        text: String,
    },
    /// Convert an amount between units
    Convert {
        amount: f64,
        from: String,
        to: String,
        /// Ingredient name, used for volume <-> weight density
        #[arg(long)]
        ingredient: Option<String>,
        /// Fail instead of assuming water when no density is known
        #[arg(long)]
        strict: bool,
    },
    /// Multiply the amount in a quantity string
    Scale {
        text: String,
        #[arg(allow_negative_numbers = true)]
        multiplier: f64,
    },
    /// Step the amount in a quantity string up or down
    Step {
        text: String,
        /// Units to add (negative to subtract)
        #[arg(allow_negative_numbers = true, default_value_t = 1.0)]
        delta: f64,
    },
    /// Merge two quantities of the same ingredient
    Combine {
        a: String,
        b: String,
        #[arg(long, default_value = "")]
        ingredient: String,
    },
    /// Build a shopping list from a JSON file of planned ingredients
    ShoppingList {
        /// Path to a JSON array of {"name", "quantity", "multiplier"}
        file: PathBuf,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { text } => {
            let quantity = parse_quantity(&text);
            println!("{}", serde_json::to_string_pretty(&quantity)?);
        }
        Commands::Convert {
            amount,
            from,
            to,
            ingredient,
            strict,
        } => {
            let options = conversion_options(strict)?;
            let result = convert_with(&options, amount, &from, &to, ingredient.as_deref());
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Scale { text, multiplier } => {
            println!("{}", scale(&text, multiplier));
        }
        Commands::Step { text, delta } => {
            println!("{}", step_quantity(&text, delta));
        }
        Commands::Combine { a, b, ingredient } => {
            println!("{}", combine(&a, &b, &ingredient));
        }
        Commands::ShoppingList { file } => {
            let items = shopping::build_from_file(&file)?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
    }

    Ok(())
}

/// Resolve conversion options: `--strict` wins over the environment.
fn conversion_options(strict: bool) -> Result<ConversionOptions> {
    if strict {
        return Ok(ConversionOptions::strict());
    }
    let config = EngineConfig::from_env().context("Invalid engine configuration")?;
    Ok(config.conversion)
}
