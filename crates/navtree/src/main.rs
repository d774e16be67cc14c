//! `navtree` - CLI for resolving a site's navbar
//!
//! This binary loads the site configuration, resolves the navbar and prints it
//! as JSON or as a text outline.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use navtree::cli::{BuildCommand, CheckCommand, Cli, Command, ConfigCommand, OutputFormat};
use navtree::nav::{depth, duplicate_links, leaf_count};
use navtree::{init_logging, render, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    let load = || {
        Config::load_from(cli.config.clone()).context("failed to load site configuration")
    };

    match cli.command {
        Command::Build(build_cmd) => handle_build(&load()?, &build_cmd),
        Command::Check(check_cmd) => handle_check(&load()?, &check_cmd),
        Command::Config(ConfigCommand::Show { json }) => handle_show(&load()?, json),
        Command::Config(ConfigCommand::Path) => {
            println!("{}", Config::default_config_path().display());
            Ok(())
        }
        Command::Config(ConfigCommand::Validate { file }) => {
            handle_validate(file.or_else(|| cli.config.clone()))
        }
    }
}

fn handle_build(config: &Config, cmd: &BuildCommand) -> anyhow::Result<()> {
    let items = config.build_navbar().context("failed to build navbar")?;
    match cmd.format {
        OutputFormat::Json => println!("{}", render::to_json(&items, !cmd.compact)?),
        OutputFormat::Outline => print!("{}", render::outline(&items)),
    }
    Ok(())
}

fn handle_check(config: &Config, cmd: &CheckCommand) -> anyhow::Result<()> {
    let items = config.build_navbar().context("navbar check failed")?;
    let duplicates = duplicate_links(&items);

    println!("navtree check");
    println!("-------------");
    println!("Site:          {}", display_or_dash(&config.site.title));
    println!("Entries:       {}", items.len());
    println!("Links:         {}", leaf_count(&items));
    println!("Depth:         {}", depth(&items));
    println!("Duplicates:    {}", duplicates.len());
    for duplicate in &duplicates {
        println!("  {} ({} items)", duplicate.link, duplicate.count);
    }

    if cmd.strict && !duplicates.is_empty() {
        bail!("{} duplicate navbar link(s)", duplicates.len());
    }
    Ok(())
}

fn handle_show(config: &Config, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    println!("Current Configuration");
    println!("=====================");
    println!();
    println!("[Site]");
    println!("  Base:               {}", config.site.base);
    println!("  Language:           {}", config.site.lang);
    println!("  Title:              {}", display_or_dash(&config.site.title));
    println!(
        "  Description:        {}",
        display_or_dash(&config.site.description)
    );
    println!();
    println!("[Build]");
    println!("  Max depth:          {}", config.build.max_depth);
    println!("  Warn duplicates:    {}", config.build.warn_duplicates);
    println!();
    println!("[Navbar]");
    println!("  Top-level entries:  {}", config.navbar.len());
    Ok(())
}

fn handle_validate(file: Option<PathBuf>) -> anyhow::Result<()> {
    let shown = file.clone().unwrap_or_else(Config::default_config_path);
    println!("Validating configuration: {}", shown.display());
    let config = Config::load_from(file).context("configuration is invalid")?;
    config.build_navbar().context("navbar is invalid")?;
    println!("Configuration is valid.");
    Ok(())
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
