pub mod history;
pub mod preview;
pub mod summary;
