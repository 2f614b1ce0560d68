//! Integration tests for encoding detection and file loading.

mod encodings;
mod files;
