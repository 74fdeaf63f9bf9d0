//! Slider-Placement-Editor (headless).
//!
//! Spielt ein Pointer-Event-Skript ab und gibt alle committeten Kurven als JSON aus.
//!
//! Aufruf: `slider-placement-editor <skript.json> [--options <datei.toml>]`

use anyhow::Context;
use slider_placement_editor::{AppController, AppState, EditorOptions, EventScript};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Slider-Placement-Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let args = CliArgs::parse(std::env::args().skip(1))?;

    let options_path = args.options.unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&options_path);

    let script = EventScript::load(&args.script)?;
    let intents = script.to_intents(options.frame_duration_ms())?;

    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    for intent in intents {
        if let Err(e) = controller.handle_intent(&mut state, intent) {
            log::error!("Event handling failed: {:#}", e);
        }
    }

    if state.has_active_placement() {
        log::warn!("Skript endet mit nicht abgeschlossener Platzierung");
    }
    log::info!(
        "{} Commands ausgeführt, {} Kurve(n) fertig",
        state.command_log.len(),
        state.finished_curves.len()
    );

    let json = serde_json::to_string_pretty(&state.finished_curves)
        .context("Kurven konnten nicht serialisiert werden")?;
    println!("{json}");
    Ok(())
}

/// Kommandozeilen-Argumente
struct CliArgs {
    script: PathBuf,
    options: Option<PathBuf>,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut script = None;
        let mut options = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--options" => {
                    let path = args.next().context("--options benötigt einen Pfad")?;
                    options = Some(PathBuf::from(path));
                }
                _ if script.is_none() => script = Some(PathBuf::from(arg)),
                other => anyhow::bail!("Unerwartetes Argument: {other}"),
            }
        }

        Ok(Self {
            script: script
                .context("Aufruf: slider-placement-editor <skript.json> [--options <datei.toml>]")?,
            options,
        })
    }
}
