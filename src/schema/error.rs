use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("malformed relationship '{relationship}': {reason}")]
    MalformedRelationship { relationship: String, reason: String },

    #[error("dangling reference: relationship '{relationship}' names unknown table '{table}'")]
    DanglingReference { relationship: String, table: String },

    #[error("table '{table}' declares no columns")]
    EmptyTable { table: String },

    #[error("table '{table}' is declared more than once")]
    DuplicateTable { table: String },

    #[error("table '{table}' is part of the aggregate schema but has no definition")]
    MissingDefinition { table: String },

    #[error("column '{table}.{column}' references unknown table '{references}'")]
    UnknownForeignTable {
        table: String,
        column: String,
        references: String,
    },

    #[error("unknown table '{0}'")]
    UnknownTable(String),

    #[error("unknown function '{0}'")]
    UnknownFunction(String),
}

pub type SchemaResult<T> = Result<T, SchemaError>;
