// ============================================================================
// ACNE SCAN - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica UI (formulario y resultados)
// - Services: SOLO comunicación HTTP + helpers puros (prompt, markdown)
// - State: Estado por pantalla con Rc<RefCell> + subscribers
// - Models: Estructuras compartidas con el backend
// ============================================================================

mod config;
mod models;
mod services;
mod viewmodels;
mod state;
mod dom;
mod views;
mod utils;
mod app;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;
use std::cell::RefCell;

// Instancia única de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::default());
    }
    log::info!("🚀 Acne Scan - Rust Puro + MVVM (backend: '{}')", CONFIG.backend_url());

    let mut app = App::new()?;
    app.render()?;
    app.mount();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la pantalla actual
pub fn rerender_app() {
    APP.with(|app_cell| {
        // try_borrow_mut: un render en curso no se re-entra
        match app_cell.try_borrow_mut() {
            Ok(mut app) => match app.as_mut() {
                Some(app) => {
                    if let Err(e) = app.render() {
                        log::error!("❌ Error re-renderizando: {:?}", e);
                    }
                }
                None => log::warn!("⚠️ [RERENDER] App no está inicializada"),
            },
            Err(_) => log::warn!("⚠️ [RERENDER] Render en curso, se omite"),
        }
    });
}

/// Re-render llamable desde JavaScript
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}
