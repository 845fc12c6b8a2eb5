pub mod face;
pub mod analysis;
pub mod upload;

pub use face::{FacePosition, capitalize};
pub use analysis::{AnalysisResult, ResultsResponse, CheckUserIdResponse, UploadResponse, ChatRequest, ChatReply};
pub use upload::{SelectedImage, FaceImages};
