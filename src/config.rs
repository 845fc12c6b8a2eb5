use serde::{Deserialize, Serialize};

const DEFAULT_CHAT_WEBHOOK_URL: &str = "http://localhost:5678/webhook/chatbot";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Vacío = mismo origen (el frontend lo sirve el propio backend)
    pub backend_url: String,
    pub chat_webhook_url: String,
    pub enable_logging: bool,
    /// "ZH" | "EN"
    pub language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            chat_webhook_url: DEFAULT_CHAT_WEBHOOK_URL.to_string(),
            enable_logging: true,
            language: "ZH".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            backend_url: option_env!("BACKEND_URL")
                .unwrap_or("")
                .trim_end_matches('/')
                .to_string(),
            chat_webhook_url: option_env!("CHAT_WEBHOOK_URL")
                .filter(|url| !url.is_empty())
                .unwrap_or(DEFAULT_CHAT_WEBHOOK_URL)
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            language: option_env!("DEFAULT_LANGUAGE")
                .unwrap_or("ZH").to_uppercase(),
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn chat_webhook_url(&self) -> &str {
        &self.chat_webhook_url
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
