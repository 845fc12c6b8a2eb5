use std::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Resultado de análisis de una región (lo genera el backend, solo lectura)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AnalysisResult {
    pub face_part: String,
    pub severity: String,
    #[serde(default)]
    pub confidence: Confidence,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub upload_time: String,
}

/// `GET /result?user_id=...`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ResultsResponse {
    #[serde(default)]
    pub results: Option<Vec<AnalysisResult>>,
}

impl ResultsResponse {
    /// Lista ausente o `null` equivale a lista vacía
    pub fn into_results(self) -> Vec<AnalysisResult> {
        self.results.unwrap_or_default()
    }
}

/// `GET /check-user-id?user_id=...`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CheckUserIdResponse {
    #[serde(default)]
    pub exists: bool,
}

/// `POST /upload`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Cuerpo enviado al webhook del chatbot
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ChatRequest {
    pub message: String,
}

/// Respuesta del webhook: texto Markdown
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ChatReply {
    #[serde(default)]
    pub reply: Option<String>,
}

/// Confianza tal como la manda el backend: valor numérico + texto para mostrar.
/// El backend la guarda como DECIMAL y a veces llega como string ("1.00").
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Confidence {
    value: f64,
    text: String,
}

impl Confidence {
    /// "N/A" o cualquier texto no numérico vale 0.0 (como lo guarda el backend),
    /// pero se sigue mostrando tal cual llegó
    pub fn from_text(text: &str) -> Self {
        let text = text.trim();
        Self {
            value: text.parse().unwrap_or(0.0),
            text: text.to_string(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<f64> for Confidence {
    fn from(value: f64) -> Self {
        Self { value, text: value.to_string() }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Confidence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

impl<'de> Deserialize<'de> for Confidence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawConfidence {
            Number(f64),
            Text(String),
            Missing(()),
        }

        Ok(match RawConfidence::deserialize(deserializer)? {
            RawConfidence::Number(value) => Confidence::from(value),
            RawConfidence::Text(text) => Confidence::from_text(&text),
            RawConfidence::Missing(()) => Confidence::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_accepts_number_and_string() {
        let json = r#"{"results":[
            {"face_part":"left","severity":"Grade II","confidence":0.8,"filename":"left.jpg","upload_time":"2025-01-01 10:00:00"},
            {"face_part":"right","severity":"Grade I","confidence":"0.65","filename":"right.jpg","upload_time":"2025-01-01 10:00:00"},
            {"face_part":"middle","severity":"Unknown","confidence":"N/A","filename":"middle.jpg","upload_time":"2025-01-01 10:00:00"}
        ]}"#;
        let results = serde_json::from_str::<ResultsResponse>(json).unwrap().into_results();
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].confidence.value(), 0.8);
        assert_eq!(results[1].confidence.value(), 0.65);
        assert_eq!(results[2].confidence.value(), 0.0);
        assert_eq!(results[2].confidence.to_string(), "N/A");
    }

    #[test]
    fn decimal_confidence_keeps_backend_text() {
        let json = r#"{"face_part":"left","severity":"Grade III","confidence":"1.00","filename":"left.jpg","upload_time":""}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.confidence.value(), 1.0);
        assert_eq!(result.confidence.to_string(), "1.00");

        let json = r#"{"face_part":"left","severity":"Grade I","confidence":0.5,"filename":"left.jpg","upload_time":""}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.confidence.to_string(), "0.5");
    }

    #[test]
    fn missing_confidence_shows_nothing() {
        let json = r#"{"face_part":"left","severity":"Grade I"}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.confidence.value(), 0.0);
        assert_eq!(result.confidence.as_str(), "");
    }

    #[test]
    fn missing_or_null_results_are_empty() {
        assert!(serde_json::from_str::<ResultsResponse>("{}").unwrap().into_results().is_empty());
        assert!(serde_json::from_str::<ResultsResponse>(r#"{"results":null}"#).unwrap().into_results().is_empty());
    }

    #[test]
    fn upload_response_without_user_id() {
        let response: UploadResponse = serde_json::from_str(r#"{"success":false,"error":"No file part"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.user_id, None);
        assert_eq!(response.error.as_deref(), Some("No file part"));
    }

    #[test]
    fn chat_reply_missing_field() {
        let reply: ChatReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply.reply, None);
    }
}
