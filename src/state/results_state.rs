// ============================================================================
// RESULTS STATE - Estado de la pantalla de resultados
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::AnalysisResult;
use crate::state::reactivity::ChangeNotifier;

/// Contenido de la sección de consejos
#[derive(Debug, Clone, PartialEq)]
pub enum AdviceContent {
    /// HTML ya renderizado y saneado
    Html(String),
    /// Texto fijo cuando el chatbot falla (se muestra como texto, no HTML)
    Fallback(String),
}

#[derive(Clone)]
pub struct ResultsState {
    pub user_id: Rc<RefCell<Option<String>>>,
    pub results: Rc<RefCell<Vec<AnalysisResult>>>,
    pub upload_time: Rc<RefCell<String>>,
    /// Overlay que bloquea toda la vista
    pub loading: Rc<RefCell<bool>>,
    pub error: Rc<RefCell<Option<String>>>,
    /// Spinner solo de la sección de consejos
    pub advice_loading: Rc<RefCell<bool>>,
    pub advice: Rc<RefCell<Option<AdviceContent>>>,
    pub notifier: ChangeNotifier,
}

impl ResultsState {
    pub fn new() -> Self {
        Self {
            user_id: Rc::new(RefCell::new(None)),
            results: Rc::new(RefCell::new(Vec::new())),
            upload_time: Rc::new(RefCell::new(String::new())),
            loading: Rc::new(RefCell::new(true)),
            error: Rc::new(RefCell::new(None)),
            advice_loading: Rc::new(RefCell::new(false)),
            advice: Rc::new(RefCell::new(None)),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn get_user_id(&self) -> Option<String> {
        self.user_id.borrow().clone()
    }

    pub fn set_user_id(&self, user_id: Option<String>) {
        *self.user_id.borrow_mut() = user_id;
    }

    pub fn get_results(&self) -> Vec<AnalysisResult> {
        self.results.borrow().clone()
    }

    /// Guarda la lista y toma el upload_time del primer resultado
    pub fn set_results(&self, results: Vec<AnalysisResult>) {
        let upload_time = results.first().map(|r| r.upload_time.clone()).unwrap_or_default();
        *self.upload_time.borrow_mut() = upload_time;
        *self.results.borrow_mut() = results;
    }

    pub fn get_upload_time(&self) -> String {
        self.upload_time.borrow().clone()
    }

    pub fn get_loading(&self) -> bool {
        *self.loading.borrow()
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    pub fn get_error(&self) -> Option<String> {
        self.error.borrow().clone()
    }

    pub fn set_error(&self, error: Option<String>) {
        *self.error.borrow_mut() = error;
    }

    pub fn get_advice_loading(&self) -> bool {
        *self.advice_loading.borrow()
    }

    pub fn set_advice_loading(&self, loading: bool) {
        *self.advice_loading.borrow_mut() = loading;
    }

    pub fn get_advice(&self) -> Option<AdviceContent> {
        self.advice.borrow().clone()
    }

    pub fn set_advice(&self, advice: Option<AdviceContent>) {
        *self.advice.borrow_mut() = advice;
    }

    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.notifier.subscribe(callback);
    }

    pub fn notify_subscribers(&self) {
        self.notifier.notify();
    }
}

impl Default for ResultsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::Confidence;

    #[test]
    fn upload_time_comes_from_first_result() {
        let state = ResultsState::new();
        state.set_results(vec![AnalysisResult {
            face_part: "left".to_string(),
            severity: "Grade I".to_string(),
            confidence: Confidence::from(0.9),
            filename: "left.jpg".to_string(),
            upload_time: "2025-03-01 12:00:00".to_string(),
        }]);
        assert_eq!(state.get_upload_time(), "2025-03-01 12:00:00");

        state.set_results(Vec::new());
        assert_eq!(state.get_upload_time(), "");
    }

    #[test]
    fn starts_loading_without_advice() {
        let state = ResultsState::new();
        assert!(state.get_loading());
        assert!(!state.get_advice_loading());
        assert_eq!(state.get_advice(), None);
    }
}
