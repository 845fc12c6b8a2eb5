use serde::{Deserialize, Serialize};

/// Ángulo de la foto / región de la cara
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacePosition {
    Left,
    Middle,
    Right,
}

impl FacePosition {
    /// Orden fijo del formulario y del multipart
    pub const ALL: [FacePosition; 3] = [FacePosition::Left, FacePosition::Middle, FacePosition::Right];

    /// Nombre en el wire (campo multipart, `face_part` del backend)
    pub fn as_str(&self) -> &'static str {
        match self {
            FacePosition::Left => "left",
            FacePosition::Middle => "middle",
            FacePosition::Right => "right",
        }
    }

    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }
}

/// Primera letra en mayúscula, el resto intacto ("left" -> "Left")
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_keep_form_order() {
        let names: Vec<_> = FacePosition::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(names, vec!["left", "middle", "right"]);
    }

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize("left"), "Left");
        assert_eq!(capitalize("mIDDLE"), "MIDDLE");
        assert_eq!(capitalize(""), "");
        assert_eq!(FacePosition::Right.label(), "Right");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&FacePosition::Left).unwrap(), "\"left\"");
    }
}
