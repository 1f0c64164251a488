//! Corpus access
//!
//! Turns mail archives on disk into the word sequences the classifier
//! consumes. Archive layout and encodings stay on this side of the fence;
//! the classifier core only ever sees [`crate::classifier::Document`]s.

pub mod source;

pub use source::{DocumentSource, MailFileSource, ZipMailSource};
