//! # Prompt Template Modules
//!
//! This module organizes all prompt templates used throughout the `nl2sql` library.

pub mod tasks;
