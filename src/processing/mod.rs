//! Text processing: section classification, skill extraction and profile assembly

pub mod document;
pub mod sections;
pub mod skills;
pub mod profile;
