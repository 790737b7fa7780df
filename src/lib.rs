//! hangul-sweep - Translate Korean text embedded in source files
//!
//! Scans a directory tree for source files, detects runs of Hangul text,
//! translates each distinct phrase once per run, and rewrites the files in
//! place (or reports what would change in dry-run mode).

pub mod cli;
pub mod config;
pub mod error;
pub mod segment;
pub mod cache;
pub mod rewrite;
pub mod translate;
pub mod walker;
pub mod workflow;
