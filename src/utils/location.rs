use web_sys::UrlSearchParams;

/// Ruta de la pantalla de resultados (la misma que usa el backend Flask)
pub const RESULTS_PATH: &str = "/AnalysisResult";

/// Pantallas de la app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    IntakeForm,
    Results,
}

/// Elegir pantalla según `location.pathname`
pub fn route_for_path(pathname: &str) -> Route {
    let path = pathname.trim_end_matches('/');
    if path.eq_ignore_ascii_case(RESULTS_PATH) {
        Route::Results
    } else {
        Route::IntakeForm
    }
}

/// URL de navegación tras un upload exitoso (`user_id` codificado para el query string)
pub fn results_url(user_id: &str) -> String {
    format!("{}?user_id={}", RESULTS_PATH, urlencoding::encode(user_id))
}

/// `location.pathname` actual ("/" si no hay window)
pub fn current_pathname() -> String {
    web_sys::window()
        .and_then(|win| win.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Leer `user_id` del query string actual. Vacío cuenta como ausente.
pub fn current_user_id() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get("user_id").filter(|id| !id.trim().is_empty())
}

/// Navegación completa (recarga la página como el formulario original)
pub fn navigate_to(url: &str) -> Result<(), String> {
    let win = web_sys::window().ok_or("No window")?;
    win.location()
        .set_href(url)
        .map_err(|e| format!("Navigation error: {:?}", e))
}
