//! Terminal output for the CLI.

use std::time::Duration;

use console::{style, StyledObject};
use fakheem_commerce::catalog::Product;
use indicatif::{ProgressBar, ProgressStyle};

/// Writes CLI messages to the terminal, or stays quiet in JSON mode.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn info(&self, msg: &str) {
        self.status(style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.status(style("✓").green(), msg);
    }

    pub fn warn(&self, msg: &str) {
        self.status(style("⚠").yellow(), msg);
    }

    /// Errors are still reported in JSON mode, as `{"error": ...}`.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            self.status(style("✗").red(), &style(msg).red().to_string());
        }
    }

    /// Only printed with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.status(style("→").dim(), &style(msg).dim().to_string());
        }
    }

    /// Written to stderr; stdout carries the HTML and JSON output.
    fn status(&self, icon: StyledObject<&str>, msg: &str) {
        if !self.json {
            eprintln!("{} {}", icon, msg);
        }
    }

    pub fn header(&self, msg: &str) {
        if !self.json {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("  {}", formatted.join("  "));
    }

    /// Spinner for the catalog fetch; hidden in JSON mode.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        let template = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        pb.set_style(template);
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Availability and featured markers for a listing row.
pub fn product_flags(product: &Product) -> String {
    let mut flags = Vec::new();
    if product.featured {
        flags.push(style("featured").yellow().to_string());
    }
    if !product.is_available {
        flags.push(style("unavailable").dim().to_string());
    }
    flags.join(" ")
}
