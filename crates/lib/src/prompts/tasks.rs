//! # Default Task Prompts
//!
//! This module contains the hardcoded prompt templates for the query generation
//! and existence-check tasks.

// --- Query Generation ---

/// Placeholders: `{schema}`
pub const QUERY_GENERATION_SYSTEM_PROMPT: &str = r#"You are a highly skilled SQL query generator specialized in SQLite.
{schema}
Based on the above schema, convert the given natural language query into a valid, efficient SQL query.

# Rules
1. Respond ONLY with a single read-only query that starts with SELECT, WITH or EXPLAIN.
2. If the user asks to modify data (INSERT, UPDATE, DELETE, DROP, ALTER, CREATE or similar), do not write any SQL. Politely explain in natural language that only read-only queries are supported, using the user's language.
3. Return only the SQL code as plain text without any markdown formatting, code fences, or additional text.
4. When the user gives an exact value (a name, a state code, a category), match it exactly with `=`. Only use `LIKE` when the user explicitly asks for a partial or fuzzy match.
5. If you must write any text that is not SQL, write it in the same language the user used."#;

/// Placeholders: `{prompt}`
pub const QUERY_GENERATION_USER_PROMPT: &str = "Natural language query: '{prompt}'";

/// Used instead of `QUERY_GENERATION_USER_PROMPT` when the session already has
/// turns.
///
/// Placeholders: `{history}`, `{prompt}`
pub const QUERY_GENERATION_WITH_HISTORY_USER_PROMPT: &str = r#"# Conversation so far
{history}

Use the conversation above to resolve references such as "those", "that store" or "the same month".

Natural language query: '{prompt}'"#;

// --- Existence Check ---

/// Placeholders: `{sql}`
pub const EXISTENCE_CHECK_USER_PROMPT: &str = r#"Check whether the following SQL query would return any data before it is executed:

{sql}

Use the available tool to check, then answer in one short sentence whether matching data exists."#;

pub const EXISTENCE_TOOL_NAME: &str = "check_data_exists";

pub const EXISTENCE_TOOL_DESCRIPTION: &str =
    "Checks whether a read-only SQL query would return at least one row. Returns true or false.";
