//! SQL schema for the Tally SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS organizations (
    org_id             TEXT PRIMARY KEY,
    name               TEXT NOT NULL,
    model_organization INTEGER NOT NULL DEFAULT 0,
    created_at         TEXT NOT NULL     -- RFC 3339 UTC
);

-- Outcome documents. `org_id` and `year` are copied out of the document for
-- indexing; `doc` is the full submission. `org_id` is deliberately not a
-- foreign key: records outlive the organizations they name.
CREATE TABLE IF NOT EXISTS program_outcomes (
    seq        INTEGER PRIMARY KEY AUTOINCREMENT,  -- insertion order
    record_id  TEXT NOT NULL UNIQUE,
    org_id     TEXT NOT NULL,
    year       INTEGER,                            -- NULL when not stated
    doc        TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS kitchen_outcomes (
    seq        INTEGER PRIMARY KEY AUTOINCREMENT,
    record_id  TEXT NOT NULL UNIQUE,
    org_id     TEXT NOT NULL,
    year       INTEGER NOT NULL,
    doc        TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS organizations_name_idx     ON organizations(name);
CREATE INDEX IF NOT EXISTS program_outcomes_org_idx   ON program_outcomes(org_id, year);
CREATE INDEX IF NOT EXISTS program_outcomes_year_idx  ON program_outcomes(year);
CREATE INDEX IF NOT EXISTS kitchen_outcomes_org_idx   ON kitchen_outcomes(org_id, year);
CREATE INDEX IF NOT EXISTS kitchen_outcomes_year_idx  ON kitchen_outcomes(year);

PRAGMA user_version = 1;
";
