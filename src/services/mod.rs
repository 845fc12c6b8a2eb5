pub mod error;
pub mod api_client;
pub mod chat_client;
pub mod advice;
pub mod markdown;

pub use error::ApiError;
pub use api_client::{AcneBackend, ApiClient};
pub use chat_client::{AdviceClient, ChatClient};
pub use advice::{build_message, build_prompt};
pub use markdown::render_markdown_safe;
