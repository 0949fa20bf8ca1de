//! Input processing module
//! Handles format detection, upload staging and text extraction

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use manager::InputManager;
