use std::{path::PathBuf, process::ExitCode};

mod config;
mod controller;
mod font;
mod ui;

use calendar_core::{CalendarContext, LayoutGeometry, ThemeKind, ThemeSet, TodayMarker};
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use config::{load_settings, Overrides, Settings};
use font::FontResource;
use ui::CalendarApp;

/// Exit status when the startup font cannot be loaded.
const FONT_LOAD_EXIT_CODE: u8 = 255;
const STARTUP_FAILURE_EXIT_CODE: u8 = 1;

#[derive(Parser, Debug)]
#[command(about = "Monthly calendar viewer")]
struct Args {
    /// Font file used for every label (default: OpenSans.ttf)
    #[arg(long)]
    font: Option<PathBuf>,
    /// Settings file (default: ./calendar.toml, then the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Theme shown at startup
    #[arg(long, value_parser = parse_theme)]
    theme: Option<ThemeKind>,
}

fn parse_theme(raw: &str) -> Result<ThemeKind, String> {
    raw.parse::<ThemeKind>().map_err(|err| err.to_string())
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let args = Args::parse();

    let settings = match load_settings(&Overrides {
        config_path: args.config,
        font_path: args.font,
        theme: args.theme,
    }) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("invalid configuration: {err:#}");
            eprintln!("Invalid configuration: {err:#}");
            return ExitCode::from(STARTUP_FAILURE_EXIT_CODE);
        }
    };
    tracing::info!(
        font = %settings.font_path.display(),
        width = settings.window_width,
        height = settings.window_height,
        frame_rate = settings.frame_rate,
        theme = settings.theme.label(),
        "starting calendar"
    );

    let font = match load_font(&settings) {
        Ok(font) => font,
        Err(code) => return ExitCode::from(code),
    };

    let today = TodayMarker::capture();
    let context = CalendarContext::new(today, ThemeSet::default(), LayoutGeometry::default());

    match run(settings, font, context) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("window backend failed: {err}");
            eprintln!("Window backend failed: {err}");
            ExitCode::from(STARTUP_FAILURE_EXIT_CODE)
        }
    }
}

/// Loads and parses the startup font; on failure returns the exit status.
fn load_font(settings: &Settings) -> Result<FontResource, u8> {
    match FontResource::load(&settings.font_path) {
        Ok(font) => {
            tracing::info!(path = %font.path().display(), bytes = font.len(), "loaded font");
            Ok(font)
        }
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("Failed to load font: {err}");
            Err(FONT_LOAD_EXIT_CODE)
        }
    }
}

fn run(settings: Settings, font: FontResource, context: CalendarContext) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([settings.window_width, settings.window_height])
            .with_resizable(false),
        ..Default::default()
    };
    let title = settings.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            Ok(Box::new(CalendarApp::from_creation_context(
                cc, context, &font, &settings,
            )))
        }),
    )
}
