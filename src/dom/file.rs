// ============================================================================
// FILE INPUT - Leer el File elegido en un <input type="file">
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, File, HtmlInputElement};
use crate::models::SelectedImage;

/// Primer archivo del input que disparó el evento (None si se canceló el diálogo)
pub fn first_file_from_event(event: &Event) -> Option<File> {
    let input = event.target()?.dyn_into::<HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Lee los bytes del File (Blob.arrayBuffer)
pub async fn read_selected_image(file: File) -> Result<SelectedImage, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(SelectedImage::new(file.name(), file.type_(), bytes))
}
