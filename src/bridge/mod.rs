//! # Bridge
//!
//! bridges to the external sources blocks are loaded from

pub mod json;
