//! Policy header rendering demo CLI.
//!
//! Loads a policy document (TOML, or JSON by extension) and prints the
//! headers it renders to.
//!
//! Usage:
//!   cargo run -p demo -- render demo/policy.toml
//!   cargo run -p demo -- render demo/policy.toml --syntax legacy
//!   cargo run -p demo -- render demo/policy.toml --syntax document
//!   cargo run -p demo -- check demo/policy.toml
//!   cargo run -p demo -- directives

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use policyhdr_contracts::{error::PolicyResult, DirectiveName};
use policyhdr_render::{
    create_feature_policy_header, create_permissions_policy_header, PolicyConfig,
};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Render Permissions-Policy and Feature-Policy headers from a policy file.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Permissions-Policy header rendering demo",
    long_about = "Loads a declarative feature policy and prints the exact\n\
                  Permissions-Policy and Feature-Policy header values it produces."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the headers for a policy document.
    Render {
        /// Path to a TOML or JSON policy document.
        path: PathBuf,

        /// Which header syntax to print.
        #[arg(long, value_enum, default_value_t = Syntax::Document)]
        syntax: Syntax,
    },
    /// Validate a policy document without printing headers.
    Check {
        /// Path to a TOML or JSON policy document.
        path: PathBuf,
    },
    /// List every supported directive name.
    Directives,
}

#[derive(Clone, Copy, ValueEnum)]
enum Syntax {
    /// Permissions-Policy only.
    Modern,
    /// Feature-Policy only.
    Legacy,
    /// Permissions-Policy, plus Feature-Policy when the document's
    /// `legacy` switch is set.
    Document,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Render { path, syntax } => run_render(&path, syntax),
        Command::Check { path } => run_check(&path),
        Command::Directives => {
            list_directives();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

fn run_render(path: &Path, syntax: Syntax) -> PolicyResult<()> {
    let config = PolicyConfig::from_file(path)?;
    let options = config.options();

    let headers = match syntax {
        Syntax::Document => config.headers()?,
        Syntax::Modern => create_permissions_policy_header(options)?.into_iter().collect(),
        Syntax::Legacy => create_feature_policy_header(options)?.into_iter().collect(),
    };

    if headers.is_empty() {
        println!("(policy disabled, no headers)");
    }
    for header in headers {
        println!("{}: {}", header.name, header.value.unwrap_or_default());
    }
    Ok(())
}

fn run_check(path: &Path) -> PolicyResult<()> {
    let config = PolicyConfig::from_file(path)?;
    let headers = config.headers()?;
    info!(path = %path.display(), headers = headers.len(), "policy document valid");
    println!(
        "OK: {} directive(s), {} header(s)",
        config.options().entries().len(),
        headers.len()
    );
    Ok(())
}

fn list_directives() {
    for name in DirectiveName::ALL {
        println!("{}", name);
    }
}
