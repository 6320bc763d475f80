// src/lib.rs

pub mod acquire;
pub mod config;
pub mod core;
pub mod error;
pub mod persistence;

pub use crate::core::anagram::{is_phrase_anagram, AnagramIndex};
pub use crate::core::engine::AnagramEngine;
pub use crate::error::{Error, Result};
