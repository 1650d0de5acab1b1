use anyhow::{Context, Result};
use bat::PrettyPrinter;
use clap::Parser;
use cliclack::spinner;
use console::style;
use std::env;

use promptlab::patterns;
use promptlab::providers::configs::github::{GithubModelsConfig, DEFAULT_HOST};
use promptlab::providers::github::GithubModelsProvider;
use promptlab::providers::types::generation::GenerationConfig;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// GitHub token (can also be set via GITHUB_TOKEN environment variable)
    #[arg(short, long)]
    token: Option<String>,

    /// Model to use
    #[arg(short, long, default_value = "gpt-4o-mini")]
    model: String,

    /// Sampling temperature
    #[arg(long, default_value_t = 1.0)]
    temperature: f32,

    /// Generation length cap
    #[arg(long, default_value_t = 1000)]
    max_tokens: i32,

    /// Nucleus sampling mass
    #[arg(long, default_value_t = 1.0)]
    top_p: f32,

    /// Prompting pattern to run
    #[arg(short, long, default_value = "verify")]
    pattern: String,

    /// List the available patterns and exit
    #[arg(short, long)]
    list: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list {
        for pattern in patterns::all() {
            println!(
                "{:<12} {}",
                style(pattern.name).bold(),
                style(pattern.description).dim()
            );
        }
        return Ok(());
    }

    let pattern = patterns::find(&cli.pattern).with_context(|| {
        format!(
            "Unknown pattern '{}' (use --list to see the available ones)",
            cli.pattern
        )
    })?;

    // Missing credentials are fatal before any request is built
    let token = cli
        .token
        .or_else(|| env::var("GITHUB_TOKEN").ok())
        .context("GitHub token must be provided via --token or GITHUB_TOKEN environment variable")?;

    let provider = GithubModelsProvider::new(GithubModelsConfig::new(
        token,
        DEFAULT_HOST.to_string(),
    ))?;

    let generation = GenerationConfig::new(&cli.model)
        .with_temperature(cli.temperature)
        .with_max_tokens(cli.max_tokens)
        .with_top_p(cli.top_p);

    println!(
        "Pattern {} {}",
        style(pattern.name).bold(),
        style(pattern.description).dim()
    );
    println!();

    let spin = spinner();
    spin.start("awaiting reply");

    let completion = provider.complete(&pattern.prompt(), &generation)?;

    spin.stop("");

    render(completion.text());
    if let Some(total) = completion.usage.total_tokens {
        println!("\n{}", style(format!("{} tokens", total)).dim());
    }
    Ok(())
}

fn render(content: &str) {
    PrettyPrinter::new()
        .input_from_bytes(content.as_bytes())
        .language("markdown")
        .print()
        .unwrap();
}
