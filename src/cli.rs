use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::AppResult;
use crate::logging::LogTarget;
use crate::route::Route;

/// Terminal slide deck viewer
#[derive(Parser, Debug)]
#[command(name = "deck")]
#[command(version)]
#[command(about = "Browse and present slide decks in the terminal")]
pub struct Cli {
    /// Where to start: `/`, `/p/<id>` or a bare presentation id
    pub route: Option<String>,

    /// Config file (defaults to $DECK_CONFIG_PATH or the user config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Extra directory of `*.toml` decks appended to the built-in ones
    #[arg(long, value_name = "DIR")]
    pub decks_dir: Option<PathBuf>,

    /// Print the catalog and exit
    #[arg(long, default_value_t = false)]
    pub list: bool,

    /// With --list, print JSON instead of text
    #[arg(long, default_value_t = false, requires = "list")]
    pub json: bool,

    /// Write logs to this file while the viewer runs
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn route(&self) -> AppResult<Route> {
        match self.route.as_deref() {
            Some(raw) => Route::parse(raw),
            None => Ok(Route::Catalog),
        }
    }

    pub fn load_config(&self) -> AppResult<Config> {
        match &self.config {
            Some(path) => Config::load_from_path(path),
            None => Config::load(),
        }
    }

    /// The flag wins over `catalog.decks_dir`.
    pub fn decks_dir<'a>(&'a self, config: &'a Config) -> Option<&'a Path> {
        self.decks_dir
            .as_deref()
            .or(config.catalog.decks_dir.as_deref())
    }

    /// Listing logs to stderr; the interactive viewer only logs to a file.
    pub fn log_target<'a>(&'a self, config: &'a Config) -> LogTarget<'a> {
        if self.list {
            return LogTarget::Stderr;
        }
        match self.log_file.as_deref().or(config.log.file.as_deref()) {
            Some(path) => LogTarget::File(path),
            None => LogTarget::Disabled,
        }
    }
}

pub fn render_listing(catalog: &Catalog, json: bool) -> AppResult<String> {
    let summaries = catalog.summaries();
    if json {
        let mut out = serde_json::to_string_pretty(&summaries)?;
        out.push('\n');
        return Ok(out);
    }

    let id_width = summaries
        .iter()
        .map(|summary| summary.id.len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for summary in &summaries {
        let _ = write!(
            out,
            "{:<id_width$}  {} ({} slides)",
            summary.id, summary.title, summary.slides
        );
        if let Some(subtitle) = &summary.subtitle {
            let _ = write!(out, " - {subtitle}");
        }
        out.push('\n');
    }
    Ok(out)
}
