//! Device Power Consumption - Main entry point
//!
//! A small desktop form that calculates the energy use and cost of an
//! electrical device from its power draw, its daily active time and the
//! electricity tariff.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod calc;
mod core;
mod input;

use std::sync::Mutex;

use tauri::Manager;

use crate::calc::FormattedResult;
use crate::core::{AppState, Config, RawInputs};

/// Application state shared across all Tauri commands
pub struct TauriState {
    pub config: Config,
    pub app_state: Mutex<AppState>,
}

// Tauri commands exposed to the frontend

/// Check whether a proposed field value passes the field's keystroke filter.
///
/// `filter` is "integer" for the power/hours/minutes fields and "decimal"
/// for the tariff field. The frontend calls this with the value the field
/// would hold after an edit and discards the edit on `false`.
#[tauri::command]
fn accepts_keystroke(filter: String, proposed: String) -> Result<bool, String> {
    match filter.as_str() {
        "integer" => Ok(input::accepts_integer(&proposed)),
        "decimal" => Ok(input::accepts_decimal(&proposed)),
        other => Err(format!("Unknown keystroke filter: {other}")),
    }
}

/// Re-read all four fields, recompute and return the formatted outputs.
///
/// On any parse failure the stored result is left untouched and an error is
/// returned; the frontend keeps the displayed values and sounds the alert.
#[tauri::command]
fn calculate(state: tauri::State<'_, TauriState>, inputs: RawInputs) -> Result<FormattedResult, String> {
    let mut app_state = state.app_state.lock().map_err(|e| e.to_string())?;
    app_state.recalculate(&inputs).map_err(|e| {
        log::warn!("Calculation rejected: {e}");
        e.to_string()
    })
}

/// Get application configuration (field defaults, currency symbol)
#[tauri::command]
fn get_config(state: tauri::State<'_, TauriState>) -> Result<Config, String> {
    Ok(state.config.clone())
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting Device Power Consumption v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::default();

    let state = TauriState {
        config,
        app_state: Mutex::new(AppState::new()),
    };

    tauri::Builder::default()
        .manage(state)
        .invoke_handler(tauri::generate_handler![
            accepts_keystroke,
            calculate,
            get_config,
        ])
        .setup(|app| {
            let window_config = app.state::<TauriState>().config.window.clone();

            if let Some(window) = app.get_webview_window("main") {
                window.set_title(&format!(
                    "Device Power Consumption v{}",
                    env!("CARGO_PKG_VERSION")
                ))?;
                window.set_size(tauri::LogicalSize::new(
                    window_config.width,
                    window_config.height,
                ))?;

                // Place the window roughly centred on the screen, offset by
                // the configured pixel bias.
                if let Some(monitor) = window.current_monitor()? {
                    let screen = monitor.size().to_logical::<f64>(monitor.scale_factor());
                    let x = screen.width / 2.0 - window_config.center_bias_x;
                    let y = screen.height / 2.0 - window_config.center_bias_y;
                    window.set_position(tauri::LogicalPosition::new(x.max(0.0), y.max(0.0)))?;
                } else {
                    log::warn!("No monitor reported, keeping the default window position");
                }
            }

            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
