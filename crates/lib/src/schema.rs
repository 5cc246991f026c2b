//! # Retail Schema Descriptor
//!
//! The three business tables the query generator is allowed to reference. The
//! description is embedded verbatim in the generation prompt, so it must stay in
//! step with `BUSINESS_TABLES_SQL`.

/// Human-readable description of the business schema, consumed as prompt text.
pub const SCHEMA_DESCRIPTION: &str = "The database 'data.db' has the following schema:\n\
    1. Products:\n\
    \x20  - ProductID\n\
    \x20  - Name (Name of product)\n\
    \x20  - Category1 (Men, Women, Kids)\n\
    \x20  - Category2 (Sandals, Casual Shoes, Boots, Sports Shoes)\n\n\
    2. Transactions:\n\
    \x20  - StoreID\n\
    \x20  - ProductID\n\
    \x20  - Quantity\n\
    \x20  - PricePerQuantity\n\
    \x20  - Timestamp (Year, Month, Day hour:minute:second)\n\n\
    3. Stores:\n\
    \x20  - StoreID\n\
    \x20  - State (two-letter code e.g. NY, IL, TX)\n\
    \x20  - ZipCode\n";

/// The names of the tables described by `SCHEMA_DESCRIPTION`.
pub const TABLE_NAMES: [&str; 3] = ["Products", "Transactions", "Stores"];

/// DDL matching `SCHEMA_DESCRIPTION`, used to bootstrap an empty business store.
pub const BUSINESS_TABLES_SQL: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS Products (
        ProductID INTEGER PRIMARY KEY,
        Name TEXT NOT NULL,
        Category1 TEXT,
        Category2 TEXT
    )",
    "CREATE TABLE IF NOT EXISTS Transactions (
        StoreID INTEGER NOT NULL,
        ProductID INTEGER NOT NULL,
        Quantity INTEGER NOT NULL,
        PricePerQuantity REAL NOT NULL,
        Timestamp TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS Stores (
        StoreID INTEGER PRIMARY KEY,
        State TEXT NOT NULL,
        ZipCode TEXT
    )",
];
