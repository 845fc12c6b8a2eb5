// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP al backend Flask
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};
use crate::config::CONFIG;
use crate::models::{CheckUserIdResponse, FaceImages, ResultsResponse, SelectedImage, UploadResponse};
use crate::services::error::ApiError;

/// Frontera HTTP del backend (mockeable en tests)
#[async_trait(?Send)]
pub trait AcneBackend {
    /// `GET /check-user-id?user_id=...`
    async fn check_user_id(&self, user_id: &str) -> Result<CheckUserIdResponse, ApiError>;

    /// `POST /upload` multipart: user_id, left, middle, right
    async fn upload_images(&self, user_id: &str, images: &FaceImages) -> Result<UploadResponse, ApiError>;

    /// `GET /result?user_id=...`
    async fn fetch_results(&self, user_id: &str) -> Result<ResultsResponse, ApiError>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Ruta estática de la foto subida: `/uploads/<user_id>/<filename>`, cada segmento codificado
    pub fn uploaded_image_url(&self, user_id: &str, filename: &str) -> String {
        self.url(&format!(
            "/uploads/{}/{}",
            urlencoding::encode(user_id),
            urlencoding::encode(filename)
        ))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl AcneBackend for ApiClient {
    async fn check_user_id(&self, user_id: &str) -> Result<CheckUserIdResponse, ApiError> {
        let url = self.url("/check-user-id");

        log::info!("🔍 [API] Verificando user_id: {}", user_id);

        let response = Request::get(&url)
            .query([("user_id", user_id)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }

    async fn upload_images(&self, user_id: &str, images: &FaceImages) -> Result<UploadResponse, ApiError> {
        let url = self.url("/upload");
        let form = build_upload_form(user_id, images)
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;

        log::info!("📤 [API] Subiendo 3 imágenes para: {}", user_id);

        let response = Request::post(&url)
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let upload = read_json::<UploadResponse>(response).await?;
        if upload.success {
            log::info!("✅ [API] Upload completado: {:?}", upload.user_id);
        } else {
            log::warn!("⚠️ [API] Upload rechazado: {:?}", upload.error);
        }
        Ok(upload)
    }

    async fn fetch_results(&self, user_id: &str) -> Result<ResultsResponse, ApiError> {
        let url = self.url("/result");

        log::info!("📋 [API] Obteniendo resultados de: {}", user_id);

        let response = Request::get(&url)
            .query([("user_id", user_id)])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }
}

/// Status no-2xx -> `ApiError::Http` con el cuerpo como mensaje
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let message = response.text().await
            .unwrap_or_else(|_| response.status_text());
        return Err(ApiError::Http { status, message });
    }

    response.json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

fn build_upload_form(user_id: &str, images: &FaceImages) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_str("user_id", user_id)?;
    for (position, image) in images.iter() {
        let blob = image_to_blob(image)?;
        form.append_with_blob_and_filename(position.as_str(), &blob, &image.file_name)?;
    }
    Ok(form)
}

fn image_to_blob(image: &SelectedImage) -> Result<Blob, JsValue> {
    let bytes = js_sys::Uint8Array::from(image.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(image.content_type());
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_is_relative_by_default() {
        let api = ApiClient::with_base_url("");
        assert_eq!(api.uploaded_image_url("jane_doe", "left.jpg"), "/uploads/jane_doe/left.jpg");
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let api = ApiClient::with_base_url("http://localhost:5000/");
        assert_eq!(api.uploaded_image_url("a", "b.png"), "http://localhost:5000/uploads/a/b.png");
    }

    #[test]
    fn image_url_segments_are_escaped() {
        let api = ApiClient::with_base_url("");
        assert_eq!(
            api.uploaded_image_url("#1_fan", "left face?.jpg"),
            "/uploads/%231_fan/left%20face%3F.jpg"
        );
        assert_eq!(api.uploaded_image_url("a/b", "c.jpg"), "/uploads/a%2Fb/c.jpg");
    }
}
