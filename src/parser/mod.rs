// file: src/parser/mod.rs
// description: text normalization module exports
// reference: internal module structure

pub mod html;
pub mod normalizer;

pub use html::HtmlStripper;
pub use normalizer::TextNormalizer;
