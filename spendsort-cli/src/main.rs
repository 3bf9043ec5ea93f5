use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use spendsort_core::{categorize, Category};
use spendsort_finance::{
    parse_discover_csv, write_table, write_transactions, CategorySummary, SpendingSummary,
    StatementPeriod,
};
use spendsort_ingest::parse_occu_statement_pdf;
use std::path::{Path, PathBuf};

mod config;

use config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "spendsort",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("SPENDSORT_BUILD_SHA"), ")"),
    about = "Categorize Discover CSV and OCCU PDF statement transactions"
)]
struct Cli {
    /// Config file (default: ~/.spendsort/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every parsed line (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Categorize both statements and write the two output CSVs
    Run {
        /// Discover CSV export
        #[arg(long)]
        csv: Option<PathBuf>,

        /// OCCU PDF statement
        #[arg(long)]
        pdf: Option<PathBuf>,

        /// Output for the categorized Discover rows
        #[arg(long)]
        csv_out: Option<PathBuf>,

        /// Output for the PDF checking transactions
        #[arg(long)]
        pdf_out: Option<PathBuf>,
    },

    /// Extract checking transactions from an OCCU PDF statement only
    Statement {
        #[arg(long)]
        pdf: Option<PathBuf>,

        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Print the category for one or more descriptions
    Categorize {
        #[arg(required = true)]
        descriptions: Vec<String>,

        /// Only print descriptions in this category (e.g. "Food & Beverage")
        #[arg(long)]
        only: Option<String>,
    },

    /// Per-category totals for the given statements
    Summary {
        #[arg(long)]
        csv: Option<PathBuf>,

        #[arg(long)]
        pdf: Option<PathBuf>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config file if none exists
    Init,

    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(p) => p.clone(),
        None => config::default_config_path()?,
    };
    let cfg = config::load_config(&config_path)?;
    init_logging(&cfg, cli.verbose);

    match cli.command {
        Command::Run {
            csv,
            pdf,
            csv_out,
            pdf_out,
        } => {
            let csv_path = csv.unwrap_or_else(|| cfg.inputs.csv.clone());
            let pdf_path = pdf.unwrap_or_else(|| cfg.inputs.pdf.clone());
            let csv_out = csv_out.unwrap_or_else(|| cfg.outputs.csv.clone());
            let pdf_out = pdf_out.unwrap_or_else(|| cfg.outputs.pdf.clone());

            require_file(&csv_path, "--csv")?;
            require_file(&pdf_path, "--pdf")?;

            let table = parse_discover_csv(&csv_path)?;
            let txns = parse_occu_statement_pdf(&pdf_path)?;

            write_table(&csv_out, &table)?;
            write_transactions(&pdf_out, &txns)?;

            println!("Discover transactions saved to {}", csv_out.display());
            println!(
                "Orange County Credit Union transactions saved to {}",
                pdf_out.display()
            );
        }

        Command::Statement { pdf, out } => {
            let pdf_path = pdf.unwrap_or_else(|| cfg.inputs.pdf.clone());
            let out = out.unwrap_or_else(|| cfg.outputs.pdf.clone());
            require_file(&pdf_path, "--pdf")?;

            let txns = parse_occu_statement_pdf(&pdf_path)?;
            write_transactions(&out, &txns)?;

            println!(
                "Parsed {} transactions from {}",
                txns.len(),
                pdf_path.display()
            );
            println!("Saved to {}", out.display());
        }

        Command::Categorize { descriptions, only } => {
            let only = only.map(|c| c.parse::<Category>()).transpose()?;
            for (category, d) in categorize_filtered(&descriptions, only) {
                println!("{category}\t{d}");
            }
        }

        Command::Summary { csv, pdf, json } => {
            let (csv, pdf) = if csv.is_none() && pdf.is_none() {
                (Some(cfg.inputs.csv.clone()), Some(cfg.inputs.pdf.clone()))
            } else {
                (csv, pdf)
            };

            let mut sections: Vec<(String, Option<StatementPeriod>, Vec<CategorySummary>)> =
                Vec::new();

            if let Some(csv_path) = csv {
                require_file(&csv_path, "--csv")?;
                let table = parse_discover_csv(&csv_path)?;
                sections.push((
                    csv_path.display().to_string(),
                    None,
                    SpendingSummary::from_table(&table),
                ));
            }

            if let Some(pdf_path) = pdf {
                require_file(&pdf_path, "--pdf")?;
                let txns = parse_occu_statement_pdf(&pdf_path)?;
                sections.push((
                    pdf_path.display().to_string(),
                    SpendingSummary::period(&txns),
                    SpendingSummary::from_transactions(&txns),
                ));
            }

            if json {
                let mut obj = serde_json::Map::new();
                for (source, period, summary) in sections {
                    obj.insert(
                        source,
                        serde_json::json!({ "period": period, "categories": summary }),
                    );
                }
                println!("{}", serde_json::to_string_pretty(&obj)?);
            } else {
                for (source, period, summary) in &sections {
                    print_summary(source, *period, summary);
                }
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config(&config_path)?,
            ConfigCommand::Show => {
                println!("# {}", config_path.display());
                print!(
                    "{}",
                    toml::to_string_pretty(&cfg).context("serialize config")?
                );
            }
        },
    }

    Ok(())
}

/// RUST_LOG wins; otherwise the config level, raised to debug by `-v`.
fn init_logging(cfg: &Config, verbose: bool) {
    if std::env::var_os("RUST_LOG").is_some() {
        pretty_env_logger::init();
        return;
    }
    let filters = if verbose { "debug" } else { cfg.log_level.as_str() };
    pretty_env_logger::formatted_builder()
        .parse_filters(filters)
        .init();
}

/// Categorize each description, keeping only `only` when given.
fn categorize_filtered(descriptions: &[String], only: Option<Category>) -> Vec<(Category, &str)> {
    descriptions
        .iter()
        .map(|d| (categorize(d), d.as_str()))
        .filter(|(category, _)| only.is_none_or(|c| c == *category))
        .collect()
}

fn require_file(path: &Path, flag: &str) -> Result<()> {
    if !path.exists() {
        bail!("file not found: {} (pass {flag} <path>)", path.display());
    }
    Ok(())
}

fn print_summary(source: &str, period: Option<StatementPeriod>, summary: &[CategorySummary]) {
    println!("## {source}\n");
    if let Some(p) = period {
        println!(
            "Period: {} to {}\n",
            p.first.format("%m/%d/%y"),
            p.last.format("%m/%d/%y")
        );
    }
    if summary.is_empty() {
        println!("(no transactions)\n");
        return;
    }
    for s in summary {
        let mut line = format!(
            "{:<20} count={:<4} total=${:.2}",
            s.category.label(),
            s.transaction_count,
            s.total_amount
        );
        if s.unparsed_amounts > 0 {
            line.push_str(&format!(" (unparsed amounts: {})", s.unparsed_amounts));
        }
        println!("{line}");
    }
    println!();
}
