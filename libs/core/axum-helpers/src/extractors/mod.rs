//! Extractors that reject with [`AppError`](crate::errors::AppError), so
//! malformed input goes through the same error translator as everything else.

pub mod id_path;
pub mod validated_json;

pub use id_path::IdPath;
pub use validated_json::ValidatedJson;
