//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use fithaven_storefront::config::{generate_default_config, CONFIG_FILE_NAMES};

use super::{ConfigArgs, ConfigCommands};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(ctx).await,
        ConfigCommands::Init { force } => init_config(force, ctx).await,
        ConfigCommands::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    let pricing = &ctx.config.pricing;
    println!();
    ctx.output.info("[pricing]");
    ctx.output.kv("currency", &pricing.currency);
    ctx.output.kv(
        "free_shipping_threshold",
        &format!("{:.2}", pricing.free_shipping_threshold),
    );
    ctx.output
        .kv("flat_shipping_fee", &format!("{:.2}", pricing.flat_shipping_fee));
    ctx.output.kv("tax_rate", &pricing.tax_rate.to_string());

    println!();
    ctx.output.info("[hero]");
    ctx.output
        .kv("interval_ms", &ctx.config.hero.interval_ms.to_string());

    println!();
    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output.kv(
        "format",
        &format!("{:?}", ctx.config.logging.format).to_lowercase(),
    );

    println!();
    ctx.output.info("[assistant]");
    match &ctx.config.assistant.topics {
        Some(topics) => {
            for entry in topics {
                ctx.output.list_item(&entry.topic);
            }
        }
        None => ctx.output.kv("topics", "standard"),
    }

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config_path.is_none() {
        warnings.push("no config file found, using defaults".to_string());
    }

    // Sections are checked separately so every problem is reported.
    match ctx.config.pricing.policy() {
        Ok(policy) => {
            if policy.free_shipping_threshold.is_zero() {
                warnings.push("pricing.free_shipping_threshold is 0; every order ships free".to_string());
            }
            if policy.tax_rate == 0.0 {
                warnings.push("pricing.tax_rate is 0; no tax will be charged".to_string());
            }
        }
        Err(e) => errors.push(e.to_string()),
    }
    if let Err(e) = ctx.config.hero.validate() {
        errors.push(e.to_string());
    }
    if let Err(e) = ctx.config.logging.validate() {
        errors.push(e.to_string());
    }
    if let Err(e) = ctx.config.assistant.canned_answers() {
        errors.push(e.to_string());
    }
    // The catalog's currency is only known once a session is opened.
    if errors.is_empty() {
        if let Err(e) = ctx.storefront() {
            errors.push(format!("{:#}", e));
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "valid": errors.is_empty(),
            "errors": errors,
            "warnings": warnings,
        }));
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");
    Ok(())
}
