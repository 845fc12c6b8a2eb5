// ============================================================================
// RESULTS VIEWMODEL - LÓGICA DE LA PANTALLA DE RESULTADOS
// ============================================================================
// 1. GET /result  (overlay bloqueante)
// 2. Si hay resultados -> POST al chatbot (spinner solo en la sección de consejos)
// ============================================================================

use crate::config::CONFIG;
use crate::models::AnalysisResult;
use crate::services::{build_message, build_prompt, render_markdown_safe, AcneBackend, AdviceClient, ApiClient, ChatClient};
use crate::state::{AdviceContent, ResultsState};
use crate::utils::t;

pub struct ResultsViewModel<B: AcneBackend = ApiClient, C: AdviceClient = ChatClient> {
    backend: B,
    chat: C,
    state: ResultsState,
    lang: String,
}

impl ResultsViewModel<ApiClient, ChatClient> {
    pub fn new(state: ResultsState) -> Self {
        Self::with_clients(ApiClient::new(), ChatClient::new(), state)
    }
}

impl<B: AcneBackend, C: AdviceClient> ResultsViewModel<B, C> {
    pub fn with_clients(backend: B, chat: C, state: ResultsState) -> Self {
        Self {
            backend,
            chat,
            state,
            lang: CONFIG.language().to_string(),
        }
    }

    pub fn with_language(mut self, lang: &str) -> Self {
        self.lang = lang.to_string();
        self
    }

    pub fn state(&self) -> &ResultsState {
        &self.state
    }

    /// Montaje de la pantalla. Sin user_id no se hace ninguna petición.
    pub async fn load(&self, user_id: Option<String>) {
        let user_id = match user_id.filter(|id| !id.trim().is_empty()) {
            Some(id) => id,
            None => {
                log::info!("ℹ️ [RESULTS] Sin user_id en la URL, nada que cargar");
                self.state.set_loading(false);
                self.state.notify_subscribers();
                return;
            }
        };

        self.state.set_user_id(Some(user_id.clone()));
        let results = self.fetch_results(&user_id).await;

        if !results.is_empty() {
            self.fetch_advice(&results).await;
        }
    }

    /// Lista vacía si el backend no devuelve nada o si la petición falla
    pub async fn fetch_results(&self, user_id: &str) -> Vec<AnalysisResult> {
        self.state.set_loading(true);
        self.state.set_error(None);
        self.state.notify_subscribers();

        let results = match self.backend.fetch_results(user_id).await {
            Ok(response) => {
                let results = response.into_results();
                log::info!("✅ [RESULTS] {} resultados para {}", results.len(), user_id);
                results
            }
            Err(e) => {
                log::error!("❌ [RESULTS] Error obteniendo resultados: {}", e);
                self.state.set_error(Some(t("results_failed", &self.lang)));
                Vec::new()
            }
        };

        self.state.set_results(results.clone());
        self.state.set_loading(false);
        self.state.notify_subscribers();
        results
    }

    /// Pide consejos al chatbot y guarda el HTML (o el texto de fallback)
    pub async fn fetch_advice(&self, results: &[AnalysisResult]) {
        if results.is_empty() {
            return;
        }

        self.state.set_advice_loading(true);
        self.state.notify_subscribers();

        let prompt = build_prompt(results);
        let message = build_message(&prompt, &self.lang);

        let advice = match self.chat.request_advice(&message).await {
            Ok(reply) => {
                let markdown = reply.reply.unwrap_or_default();
                log::info!("✅ [RESULTS] Consejos recibidos ({} caracteres)", markdown.len());
                AdviceContent::Html(render_markdown_safe(&markdown))
            }
            Err(e) => {
                log::error!("❌ [RESULTS] Error obteniendo consejos: {}", e);
                AdviceContent::Fallback(t("advice_failed", &self.lang))
            }
        };

        self.state.set_advice(Some(advice));
        self.state.set_advice_loading(false);
        self.state.notify_subscribers();
    }
}
