// docsim: TF-IDF cosine similarity between two text documents.
//
// The similarity core is pure and synchronous. The web module (feature
// `web`) and the CLI in main.rs are thin callers around it.

pub mod config;
pub mod error;
pub mod output;
pub mod similarity;

#[cfg(feature = "web")]
pub mod web;
