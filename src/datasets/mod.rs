//! # Datasets
//!
//! The fixed set of narrative tables the sandbox runs against, plus their
//! schema descriptions. The pipeline treats datasets as open-ended and
//! addresses them by name; this module is the one place that knows which
//! tables exist in this deployment.
//!
//! Four tables tell the story of a traitor inside a 1380 military camp:
//! the patrol log, the paymaster's ledger, movement records from the
//! surrounding roads, and reports of secret contacts.

pub mod seed;

use serde::Serialize;

/// SQL column type as shown to learners in schema descriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    Integer,
    Varchar(u16),
    Date,
    Time,
    Text,
}

impl SqlType {
    /// SQL type name, e.g. `VARCHAR(100)`
    pub fn sql_name(&self) -> String {
        match self {
            SqlType::Integer => "INTEGER".to_string(),
            SqlType::Varchar(len) => format!("VARCHAR({})", len),
            SqlType::Date => "DATE".to_string(),
            SqlType::Time => "TIME".to_string(),
            SqlType::Text => "TEXT".to_string(),
        }
    }
}

/// One column of a dataset schema
#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub primary_key: bool,
    pub nullable: bool,
}

/// A named, schema-fixed, read-only table
#[derive(Debug, Clone, Copy)]
pub struct DatasetDef {
    pub name: &'static str,
    pub title: &'static str,
    pub columns: &'static [ColumnDef],
}

/// Learner-facing schema description of one column
#[derive(Debug, Clone, Serialize)]
pub struct ColumnDescription {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub sql_type: String,
    #[serde(rename = "isPrimary")]
    pub is_primary: bool,
    #[serde(rename = "isNullable")]
    pub is_nullable: bool,
}

impl DatasetDef {
    /// Schema description for the `/case/{id}/schema` response
    pub fn describe(&self) -> Vec<ColumnDescription> {
        self.columns
            .iter()
            .map(|col| ColumnDescription {
                name: col.name,
                sql_type: col.sql_type.sql_name(),
                is_primary: col.primary_key,
                is_nullable: col.nullable,
            })
            .collect()
    }
}

const fn pk(name: &'static str) -> ColumnDef {
    ColumnDef {
        name,
        sql_type: SqlType::Integer,
        primary_key: true,
        nullable: false,
    }
}

const fn col(name: &'static str, sql_type: SqlType) -> ColumnDef {
    ColumnDef {
        name,
        sql_type,
        primary_key: false,
        nullable: true,
    }
}

/// Guard entries and exits at the camp gates
pub const CAMP_LOGS: DatasetDef = DatasetDef {
    name: "camp_logs",
    title: "Patrol log (camp_logs)",
    columns: &[
        pk("log_id"),
        col("guard_name", SqlType::Varchar(100)),
        col("date", SqlType::Date),
        col("shift", SqlType::Varchar(50)),
        col("action", SqlType::Varchar(50)),
        col("time", SqlType::Time),
        col("notes", SqlType::Text),
    ],
};

/// The paymaster's ledger
pub const FINANCES: DatasetDef = DatasetDef {
    name: "finances",
    title: "Financial operations (finances)",
    columns: &[
        pk("trans_id"),
        col("recipient_name", SqlType::Varchar(100)),
        col("amount", SqlType::Integer),
        col("transaction_date", SqlType::Date),
    ],
};

/// Who travelled which road, and with whom
pub const MOVEMENT_RECORDS: DatasetDef = DatasetDef {
    name: "movement_records",
    title: "Movement records (movement_records)",
    columns: &[
        pk("move_id"),
        col("main_person", SqlType::Varchar(100)),
        col("companion", SqlType::Varchar(100)),
        col("route", SqlType::Varchar(100)),
        col("date", SqlType::Date),
        col("notes", SqlType::Text),
    ],
};

/// Reported contacts with outsiders
pub const SECRET_NEGOTIATIONS: DatasetDef = DatasetDef {
    name: "secret_negotiations",
    title: "Secret negotiations (secret_negotiations)",
    columns: &[
        pk("neg_id"),
        col("person_name", SqlType::Varchar(100)),
        col("contact_type", SqlType::Varchar(50)),
        col("date", SqlType::Date),
        col("details", SqlType::Text),
    ],
};

/// All datasets in this deployment
pub fn all() -> &'static [DatasetDef] {
    &[CAMP_LOGS, FINANCES, MOVEMENT_RECORDS, SECRET_NEGOTIATIONS]
}

/// Look up a dataset by table name
pub fn by_name(name: &str) -> Option<&'static DatasetDef> {
    all().iter().find(|d| d.name == name)
}
