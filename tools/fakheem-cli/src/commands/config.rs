//! Configuration management commands.

use std::collections::HashSet;

use anyhow::{bail, Result};
use dialoguer::Confirm;
use fakheem_commerce::search::CategoryFilter;
use fakheem_storefront::StorefrontConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { path, force } => init_config(&path, force, ctx),
        ConfigCommand::Validate { path } => validate_config(path.as_deref(), ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(built-in defaults)"),
    }

    let config = &ctx.config;
    ctx.output.info("[store]");
    ctx.output.kv("name", &config.store.name);
    ctx.output.kv("tagline", &config.store.tagline);
    ctx.output.kv("currency", config.store.currency.code());
    ctx.output.kv("phone", &config.store.contact.phone);
    ctx.output.kv("email", &config.store.contact.email);

    ctx.output.info("[listing]");
    ctx.output.kv("default_sort", config.listing.default_sort.as_str());
    for option in &config.listing.categories {
        ctx.output.kv(&option.value, &option.label);
    }

    ctx.output.info("[logging]");
    ctx.output.kv("min_level", config.logging.min_level.as_str());
    ctx.output.kv("format", &format!("{:?}", config.logging.format));

    ctx.output.info("[theme]");
    ctx.output.kv("default", config.theme.default.as_str());

    Ok(())
}

fn init_config(path: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.resolve_path(path);

    if config_path.exists() && !force {
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()?;

        if !overwrite {
            ctx.output.info("Left existing config unchanged");
            return Ok(());
        }
    }

    std::fs::write(&config_path, StorefrontConfig::default().to_toml_string()?)?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(path: Option<&str>, ctx: &Context) -> Result<()> {
    let loaded;
    let config = match path {
        Some(path) => {
            loaded = StorefrontConfig::load(ctx.resolve_path(path))?;
            &loaded
        }
        None => &ctx.config,
    };

    ctx.output.header("Validating configuration");
    let (errors, warnings) = check(config);

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }
    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
    } else {
        ctx.output.success("Configuration is valid (with warnings)");
    }

    Ok(())
}

/// Collect errors and warnings for a config.
fn check(config: &StorefrontConfig) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if config.store.name.trim().is_empty() {
        errors.push("store.name is required".to_string());
    }

    let mut seen = HashSet::new();
    for (i, option) in config.listing.categories.iter().enumerate() {
        if option.value.trim().is_empty() {
            errors.push(format!("listing.categories[{}].value is empty", i));
        } else if !seen.insert(option.value.as_str()) {
            errors.push(format!("duplicate category '{}'", option.value));
        }
    }

    if !config
        .listing
        .categories
        .iter()
        .any(|option| option.filter() == CategoryFilter::All)
    {
        warnings.push("listing.categories has no \"all\" option".to_string());
    }

    if !config.store.contact.email.contains('@') {
        warnings.push(format!(
            "store.contact.email '{}' does not look like an address",
            config.store.contact.email
        ));
    }

    (errors, warnings)
}
