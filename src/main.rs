#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

#[allow(unused_imports)]
use ema_insight::{
    Cli, // The struct from lib.rs
    HttpInsightSource,
    InsightEngine,
    run_app, // The function from lib.rs
};

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Even though we use 'start', the compiler still wants a main() function
// because this file is compiled as a binary.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    use std::sync::Arc;

    // A. Init Logging
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("EMA Insight starting in WASM mode...");

    // B. Wire the engine to the service (same default URL as native)
    let source = HttpInsightSource::new(ema_insight::config::API.base_url)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let engine = InsightEngine::new(Arc::new(source));

    // C. Find the canvas element by ID
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("no document on the global window")?;
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("failed to find canvas with id 'the_canvas_id'")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(run_app(cc, engine))),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use clap::Parser;
    use eframe::NativeOptions;
    use eframe::egui::ViewportBuilder;
    use ema_insight::ui::UI_CONFIG;
    use ema_insight::ui::config::UI_TEXT;
    use std::sync::Arc;
    use tokio::runtime::Runtime;

    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Runtime for the fetches. Must outlive the window.
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    let source = HttpInsightSource::new(&args.api_url).context("Failed to build HTTP client")?;
    log::info!("EMA service at {}", source.base_url());
    let engine = InsightEngine::new(Arc::new(source), rt.handle().clone());

    // D. Run Native App
    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([UI_CONFIG.window_width, UI_CONFIG.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, engine))),
    )
    .map_err(|e| anyhow::anyhow!("eframe failed: {e}"))?;

    drop(rt);
    Ok(())
}
