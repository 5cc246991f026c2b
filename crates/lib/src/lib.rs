//! # Natural Language to SQL
//!
//! This crate turns natural-language questions about a fixed retail schema
//! (products, transactions, stores) into read-only SQL using a configurable AI
//! provider, runs the SQL against a local SQLite store, and keeps a per-session
//! conversation history so follow-up questions can be answered in context.
//!
//! The entry point is [`QueryExecutor`].

pub mod errors;
pub mod executor;
pub mod generation;
pub mod guard;
pub mod oracle;
pub mod probe;
pub mod prompts;
pub mod providers;
pub mod schema;
pub mod session;
pub mod types;

pub use errors::PromptError;
pub use executor::QueryExecutor;
pub use guard::is_read_only;
pub use session::{new_session_id, SessionStore};
pub use types::{CheckAndExecuteResponse, ConversationTurn, QueryResponse, Row};
