//! Command implementations for the infographic CLI.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AppConfig;
use crate::error::Result;
use crate::export::{export, export_path, write_export};
use crate::extraction::{AnalysisEngine, AnalysisResult};
use crate::store::{FileStore, StylePreferences};
use crate::visualization::{StyleSettings, render};

/// Execute a CLI command.
pub fn execute_command(args: InfographicArgs) -> Result<()> {
    let config = AppConfig::load(args.config.as_deref())?;

    match &args.command {
        Command::Analyze(input) => analyze_text(input, &config, &args),
        Command::Render(render_args) => render_template(render_args, &config, &args),
        Command::Export(export_args) => export_template(export_args, &config, &args),
        Command::Serve(serve_args) => serve(serve_args, config),
        Command::Style(style_args) => style(&style_args.command, &config, &args),
    }
}

/// Read the input text from `--text`, a file or standard input.
pub fn read_input(input: &InputArgs) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    let text = match &input.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            text
        }
    };
    Ok(text)
}

fn analyze_input(input: &InputArgs, config: &AppConfig) -> Result<AnalysisResult> {
    let text = read_input(input)?;
    let engine = AnalysisEngine::new(config.analysis.clone())?;
    engine.validate(&text)?;
    info!(length = text.chars().count(), "analyzing text");
    engine.analyze(&text)
}

fn analyze_text(input: &InputArgs, config: &AppConfig, cli_args: &InfographicArgs) -> Result<()> {
    let result = analyze_input(input, config)?;
    output_result("Analysis complete", &result, cli_args)
}

fn render_template(args: &RenderArgs, config: &AppConfig, cli_args: &InfographicArgs) -> Result<()> {
    let result = analyze_input(&args.input, config)?;
    let settings = saved_style(&config.store_path);
    let infographic = render(args.kind, &result, &settings);
    output_result(&format!("Rendered {} template", args.kind), &infographic, cli_args)
}

fn export_template(args: &ExportArgs, config: &AppConfig, cli_args: &InfographicArgs) -> Result<()> {
    let result = analyze_input(&args.input, config)?;
    let settings = saved_style(&config.store_path);
    let infographic = render(args.kind, &result, &settings);

    let content = export(args.export_format, &infographic, &result, &args.filename)?;
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| export_path(Path::new("."), &args.filename, args.export_format));
    write_export(&path, &content)?;

    let exported = ExportResult {
        path,
        format: args.export_format,
        bytes: content.len(),
    };
    output_result("Export complete", &exported, cli_args)
}

fn serve(args: &ServeArgs, mut config: AppConfig) -> Result<()> {
    if let Some(bind) = &args.bind {
        config.server.bind_addr = bind.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let engine = AnalysisEngine::new(config.analysis.clone())?;
    let runtime = tokio::runtime::Runtime::new().context("failed to start the async runtime")?;
    runtime.block_on(crate::api::serve(&config.server, engine))
}

fn style(command: &StyleCommand, config: &AppConfig, cli_args: &InfographicArgs) -> Result<()> {
    let preferences = open_preferences(&config.store_path)?;
    let settings = match command {
        StyleCommand::Show => preferences.load()?,
        StyleCommand::Set { key, value } => {
            let settings = preferences.update(key, value)?;
            info!(key = %key, value = %value, "style setting saved");
            settings
        }
        StyleCommand::Reset => preferences.reset()?,
    };
    output_result("Style settings", &settings, cli_args)
}

fn open_preferences(path: &Path) -> Result<StylePreferences> {
    let store = FileStore::open(path)?;
    Ok(StylePreferences::new(Arc::new(store)))
}

/// The saved style, or the defaults when the store cannot be read. Rendering
/// never fails because of a broken preference file.
fn saved_style(path: &Path) -> StyleSettings {
    match open_preferences(path).and_then(|preferences| preferences.load()) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(error = %e, "using default style settings");
            StyleSettings::default()
        }
    }
}
