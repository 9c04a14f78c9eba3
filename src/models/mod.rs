pub mod auth;
pub mod summary;

pub use auth::AuthResponse;
pub use summary::{EquipmentRow, UploadSummary};
