pub mod colors;
pub mod format;
pub mod table;
