// ============================================================================
// APP - Aplicación principal
// ============================================================================
// Elige pantalla por `location.pathname` y re-renderiza completo cuando el
// estado de esa pantalla notifica cambios.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::{append_child, get_element_by_id, release_listeners, set_inner_html};
use crate::state::{IntakeState, RenderGate, ResultsState};
use crate::utils::{current_pathname, current_user_id, route_for_path, Route};
use crate::viewmodels::ResultsViewModel;
use crate::views::{render_intake_form, render_results};

/// Estado de la pantalla montada (cada pantalla es dueña del suyo)
#[derive(Clone)]
pub enum Screen {
    Intake(IntakeState),
    Results(ResultsState),
}

pub struct App {
    screen: Screen,
    root: Option<Element>,
}

impl App {
    /// Crear nueva aplicación
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let route = route_for_path(&current_pathname());
        log::info!("🧭 [APP] Ruta: {:?}", route);

        let screen = match route {
            Route::IntakeForm => {
                let state = IntakeState::new();
                state.subscribe_to_changes(schedule_rerender);
                Screen::Intake(state)
            }
            Route::Results => {
                let state = ResultsState::new();
                state.subscribe_to_changes(schedule_rerender);
                Screen::Results(state)
            }
        };

        Ok(Self {
            screen,
            root: Some(root),
        })
    }

    /// Lanza las peticiones de montaje (solo la pantalla de resultados tiene)
    pub fn mount(&self) {
        if let Screen::Results(state) = &self.screen {
            let vm = ResultsViewModel::new(state.clone());
            wasm_bindgen_futures::spawn_local(async move {
                vm.load(current_user_id()).await;
            });
        }
    }

    /// Renderizar aplicación
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            // Limpiar contenido anterior (y los closures de sus listeners)
            let released = release_listeners();
            log::debug!("🧹 [APP] {} listeners liberados", released);
            set_inner_html(root, "");

            let view = match &self.screen {
                Screen::Intake(state) => render_intake_form(state)?,
                Screen::Results(state) => render_results(state)?,
            };
            append_child(root, &view)?;
        }
        Ok(())
    }
}

thread_local! {
    static RENDER_GATE: RenderGate = RenderGate::new();
}

/// Agrupa varias notificaciones seguidas en un solo render
fn schedule_rerender() {
    use gloo_timers::callback::Timeout;

    let gate = RENDER_GATE.with(|gate| gate.clone());
    if !gate.try_schedule() {
        return;
    }
    Timeout::new(0, move || {
        gate.complete();
        crate::rerender_app();
    })
    .forget();
}
