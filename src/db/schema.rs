pub const SCHEMA_VERSION: i32 = 1;

pub const SCHEMA_V1: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL
);

-- Address book, one row per person in display order
CREATE TABLE IF NOT EXISTS persons (
    position INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    phone TEXT NOT NULL,
    email TEXT NOT NULL,
    address TEXT NOT NULL,
    tags TEXT NOT NULL DEFAULT '[]',
    status TEXT NOT NULL DEFAULT 'uncontacted',
    remark TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_person_name ON persons(name);
CREATE INDEX IF NOT EXISTS idx_person_status ON persons(status);
"#;
