use base64::{engine::general_purpose::STANDARD, Engine as _};
use crate::models::face::FacePosition;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Imagen elegida en un slot del formulario (bytes ya leídos del `File`)
#[derive(Clone, PartialEq, Debug)]
pub struct SelectedImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedImage {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn content_type(&self) -> &str {
        if self.content_type.is_empty() {
            FALLBACK_CONTENT_TYPE
        } else {
            &self.content_type
        }
    }

    /// Equivalente a `FileReader.readAsDataURL`
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.content_type(), STANDARD.encode(&self.bytes))
    }
}

/// Las tres fotos completas, listas para el multipart
#[derive(Clone, PartialEq, Debug)]
pub struct FaceImages {
    pub left: SelectedImage,
    pub middle: SelectedImage,
    pub right: SelectedImage,
}

impl FaceImages {
    pub fn get(&self, position: FacePosition) -> &SelectedImage {
        match position {
            FacePosition::Left => &self.left,
            FacePosition::Middle => &self.middle,
            FacePosition::Right => &self.right,
        }
    }

    /// (posición, imagen) en orden left, middle, right
    pub fn iter(&self) -> impl Iterator<Item = (FacePosition, &SelectedImage)> + '_ {
        FacePosition::ALL.into_iter().map(move |position| (position, self.get(position)))
    }
}
