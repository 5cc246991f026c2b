//! # Providers
//!
//! AI providers generate text and tool invocations; storage providers run SQL.

pub mod ai;
pub mod db;
pub mod factory;
