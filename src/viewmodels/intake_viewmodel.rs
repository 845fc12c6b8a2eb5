// ============================================================================
// INTAKE VIEWMODEL - LÓGICA DEL FORMULARIO
// ============================================================================
// Nombre -> verificación de user_id -> 3 fotos -> upload multipart.
// Devuelve mensajes listos para el alert; la vista solo los muestra.
// ============================================================================

use crate::config::CONFIG;
use crate::models::{FaceImages, FacePosition, SelectedImage};
use crate::services::{AcneBackend, ApiClient};
use crate::state::{FormStep, IntakeState};
use crate::utils::{derive_user_id, results_url, t};

pub struct IntakeViewModel<B: AcneBackend = ApiClient> {
    backend: B,
    state: IntakeState,
    lang: String,
}

impl IntakeViewModel<ApiClient> {
    pub fn new(state: IntakeState) -> Self {
        Self::with_backend(ApiClient::new(), state)
    }
}

impl<B: AcneBackend> IntakeViewModel<B> {
    pub fn with_backend(backend: B, state: IntakeState) -> Self {
        Self {
            backend,
            state,
            lang: CONFIG.language().to_string(),
        }
    }

    pub fn with_language(mut self, lang: &str) -> Self {
        self.lang = lang.to_string();
        self
    }

    pub fn state(&self) -> &IntakeState {
        &self.state
    }

    /// Paso 1: validar nombre y comprobar que el user_id está libre.
    /// Ok(user_id) solo si se pasa a UploadPending.
    pub async fn submit_username(&self, name: &str) -> Result<String, String> {
        if name.trim().is_empty() {
            return Err(t("name_required", &self.lang));
        }

        let user_id = derive_user_id(name);
        self.state.set_username(name.to_string());

        log::info!("🔍 [FORM] Comprobando disponibilidad de: {}", user_id);

        match self.backend.check_user_id(&user_id).await {
            Ok(response) if response.exists => {
                log::warn!("⚠️ [FORM] user_id ya existe: {}", user_id);
                Err(t("name_taken", &self.lang))
            }
            Ok(_) => {
                self.state.set_user_id(user_id.clone());
                self.state.set_step(FormStep::UploadPending);
                self.state.notify_subscribers();
                log::info!("✅ [FORM] user_id libre, pasando a upload: {}", user_id);
                Ok(user_id)
            }
            Err(e) => {
                log::error!("❌ [FORM] Error comprobando user_id: {}", e);
                Err(t("check_failed", &self.lang))
            }
        }
    }

    /// Reemplaza la imagen (y su preview) de ese slot
    pub fn select_image(&self, position: FacePosition, image: SelectedImage) {
        log::info!("🖼️ [FORM] Imagen {} seleccionada: {} ({} bytes)",
                   position.as_str(), image.file_name, image.bytes.len());
        self.state.set_image(position, image);
        self.state.notify_subscribers();
    }

    pub fn clear_image(&self, position: FacePosition) {
        self.state.clear_image(position);
        self.state.notify_subscribers();
    }

    /// UploadPending -> NameEntry. Se conservan user_id e imágenes.
    pub fn go_back(&self) {
        if self.state.get_step() == FormStep::UploadPending {
            self.state.set_step(FormStep::NameEntry);
            self.state.notify_subscribers();
        }
    }

    /// Las tres imágenes o el mensaje con los slots que faltan
    pub fn validate_upload(&self) -> Result<FaceImages, String> {
        self.state.complete_images().ok_or_else(|| {
            let missing = self.state
                .missing_positions()
                .iter()
                .map(|p| p.label())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} {}", t("missing_images", &self.lang), missing)
        })
    }

    /// Paso 2: upload multipart. Ok(url de resultados a la que navegar).
    /// Si falla, el estado queda intacto para reintentar.
    pub async fn submit_upload(&self) -> Result<String, String> {
        let images = self.validate_upload()?;
        let user_id = self.state.get_user_id();

        match self.backend.upload_images(&user_id, &images).await {
            Ok(response) if response.success => {
                let target_id = response.user_id
                    .filter(|id| !id.is_empty())
                    .unwrap_or(user_id);
                self.state.set_step(FormStep::Submitted);
                self.state.notify_subscribers();
                log::info!("✅ [FORM] Upload OK, navegando a resultados de {}", target_id);
                Ok(results_url(&target_id))
            }
            Ok(response) => {
                log::error!("❌ [FORM] Upload rechazado por el backend: {:?}", response.error);
                Err(t("upload_failed", &self.lang))
            }
            Err(e) => {
                log::error!("❌ [FORM] Error en upload: {}", e);
                Err(t("upload_failed", &self.lang))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use crate::models::{CheckUserIdResponse, ResultsResponse, UploadResponse};
    use crate::services::ApiError;

    struct MockBackend {
        exists: bool,
        check_error: Option<ApiError>,
        upload_response: Result<UploadResponse, ApiError>,
        checked: RefCell<Vec<String>>,
        uploads: RefCell<Vec<(String, FaceImages)>>,
    }

    impl MockBackend {
        fn free() -> Self {
            Self {
                exists: false,
                check_error: None,
                upload_response: Ok(UploadResponse {
                    success: true,
                    user_id: Some("test_user".to_string()),
                    error: None,
                }),
                checked: RefCell::new(Vec::new()),
                uploads: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl AcneBackend for MockBackend {
        async fn check_user_id(&self, user_id: &str) -> Result<CheckUserIdResponse, ApiError> {
            self.checked.borrow_mut().push(user_id.to_string());
            match &self.check_error {
                Some(e) => Err(e.clone()),
                None => Ok(CheckUserIdResponse { exists: self.exists }),
            }
        }

        async fn upload_images(&self, user_id: &str, images: &FaceImages) -> Result<UploadResponse, ApiError> {
            self.uploads.borrow_mut().push((user_id.to_string(), images.clone()));
            self.upload_response.clone()
        }

        async fn fetch_results(&self, _user_id: &str) -> Result<ResultsResponse, ApiError> {
            Ok(ResultsResponse::default())
        }
    }

    fn vm(backend: MockBackend) -> IntakeViewModel<MockBackend> {
        IntakeViewModel::with_backend(backend, IntakeState::new()).with_language("EN")
    }

    fn photo(name: &str) -> SelectedImage {
        SelectedImage::new(name, "image/jpeg", name.as_bytes().to_vec())
    }

    fn fill_all(vm: &IntakeViewModel<MockBackend>) {
        for position in FacePosition::ALL {
            vm.select_image(position, photo(&format!("{}.jpg", position.as_str())));
        }
    }

    #[test]
    fn empty_name_is_rejected_without_request() {
        let vm = vm(MockBackend::free());
        let err = block_on(vm.submit_username("   ")).unwrap_err();
        assert_eq!(err, "Please enter your name before proceeding.");
        assert!(vm.backend.checked.borrow().is_empty());
        assert_eq!(vm.state().get_step(), FormStep::NameEntry);
    }

    #[test]
    fn check_uses_slug() {
        let vm = vm(MockBackend::free());
        let id = block_on(vm.submit_username("Jane  Doe")).unwrap();
        assert_eq!(id, "jane_doe");
        assert_eq!(*vm.backend.checked.borrow(), vec!["jane_doe".to_string()]);
        assert_eq!(vm.state().get_user_id(), "jane_doe");
        assert_eq!(vm.state().get_step(), FormStep::UploadPending);
    }

    #[test]
    fn existing_user_does_not_advance() {
        let vm = vm(MockBackend { exists: true, ..MockBackend::free() });
        let err = block_on(vm.submit_username("Jane Doe")).unwrap_err();
        assert_eq!(err, "This name is already taken, please choose another one.");
        assert_eq!(vm.state().get_step(), FormStep::NameEntry);
        assert_eq!(vm.state().get_user_id(), "");
    }

    #[test]
    fn check_failure_does_not_advance() {
        let vm = vm(MockBackend {
            check_error: Some(ApiError::Network("offline".to_string())),
            ..MockBackend::free()
        });
        let err = block_on(vm.submit_username("Jane")).unwrap_err();
        assert!(err.starts_with("Something went wrong while checking"));
        assert_eq!(vm.state().get_step(), FormStep::NameEntry);
    }

    #[test]
    fn upload_rejected_while_a_slot_is_empty() {
        let vm = vm(MockBackend::free());
        block_on(vm.submit_username("Test User")).unwrap();
        vm.select_image(FacePosition::Left, photo("l.jpg"));
        vm.select_image(FacePosition::Right, photo("r.jpg"));

        let err = block_on(vm.submit_upload()).unwrap_err();
        assert_eq!(err, "Please select an image for: Middle");
        assert!(vm.backend.uploads.borrow().is_empty());
        assert_eq!(vm.state().get_step(), FormStep::UploadPending);
    }

    #[test]
    fn clearing_makes_upload_incomplete_again() {
        let vm = vm(MockBackend::free());
        fill_all(&vm);
        vm.clear_image(FacePosition::Left);
        assert!(vm.validate_upload().is_err());
        assert!(vm.state().get_preview(FacePosition::Middle).is_some());
        assert!(vm.state().get_preview(FacePosition::Right).is_some());
    }

    #[test]
    fn failed_upload_keeps_form_state() {
        let vm = vm(MockBackend {
            upload_response: Err(ApiError::Http { status: 500, message: "boom".to_string() }),
            ..MockBackend::free()
        });
        block_on(vm.submit_username("Test User")).unwrap();
        fill_all(&vm);

        let err = block_on(vm.submit_upload()).unwrap_err();
        assert_eq!(err, "Upload failed. Please try again.");
        assert_eq!(vm.state().get_step(), FormStep::UploadPending);
        assert!(vm.state().complete_images().is_some());

        // Reintento con el mismo estado
        assert!(block_on(vm.submit_upload()).is_err());
        assert_eq!(vm.backend.uploads.borrow().len(), 2);
    }

    #[test]
    fn unsuccessful_response_is_a_failure() {
        let vm = vm(MockBackend {
            upload_response: Ok(UploadResponse { success: false, user_id: None, error: Some("bad".to_string()) }),
            ..MockBackend::free()
        });
        block_on(vm.submit_username("Test User")).unwrap();
        fill_all(&vm);
        assert_eq!(block_on(vm.submit_upload()).unwrap_err(), "Upload failed. Please try again.");
        assert_eq!(vm.state().get_step(), FormStep::UploadPending);
    }

    #[test]
    fn back_keeps_user_id_and_images() {
        let vm = vm(MockBackend::free());
        block_on(vm.submit_username("Test User")).unwrap();
        fill_all(&vm);
        vm.go_back();
        assert_eq!(vm.state().get_step(), FormStep::NameEntry);
        assert_eq!(vm.state().get_user_id(), "test_user");
        assert!(vm.state().complete_images().is_some());
    }

    #[test]
    fn end_to_end_navigates_to_results() {
        let vm = vm(MockBackend::free());
        let renders = std::rc::Rc::new(std::cell::Cell::new(0));
        {
            let renders = renders.clone();
            vm.state().subscribe_to_changes(move || renders.set(renders.get() + 1));
        }

        assert_eq!(block_on(vm.submit_username("Test User")).unwrap(), "test_user");
        fill_all(&vm);
        let url = block_on(vm.submit_upload()).unwrap();

        assert!(url.contains("user_id=test_user"));
        assert_eq!(url, "/AnalysisResult?user_id=test_user");
        assert_eq!(vm.state().get_step(), FormStep::Submitted);

        let uploads = vm.backend.uploads.borrow();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0].0, "test_user");
        assert_eq!(uploads[0].1.middle.file_name, "middle.jpg");
        assert!(renders.get() >= 5);
    }

    #[test]
    fn missing_user_id_in_response_falls_back_to_slug() {
        let vm = vm(MockBackend {
            upload_response: Ok(UploadResponse { success: true, user_id: None, error: None }),
            ..MockBackend::free()
        });
        block_on(vm.submit_username("Ana  María")).unwrap();
        fill_all(&vm);
        assert_eq!(block_on(vm.submit_upload()).unwrap(), "/AnalysisResult?user_id=ana_mar%C3%ADa");
    }

    #[test]
    fn returned_user_id_is_escaped_in_navigation_url() {
        let vm = vm(MockBackend {
            upload_response: Ok(UploadResponse {
                success: true,
                user_id: Some("tom_&_jerry#1".to_string()),
                error: None,
            }),
            ..MockBackend::free()
        });
        block_on(vm.submit_username("Tom & Jerry#1")).unwrap();
        fill_all(&vm);
        assert_eq!(
            block_on(vm.submit_upload()).unwrap(),
            "/AnalysisResult?user_id=tom_%26_jerry%231"
        );
    }
}
