use std::collections::HashSet;

use serde::Serialize;

use super::{
    error::{SchemaError, SchemaResult},
    functions::{FUNCTIONS, FunctionSignature, find_function},
    relationship::{Relationship, parse_all},
    stats::{COMPLEX_RELATIONSHIPS, FUNCTIONS_COUNT, TABLE_STATS, TRIGGERS_COUNT, TableDescriptor},
    tables::{AGGREGATE_SCHEMA, TABLES, TableSchema},
};

/// Read-only view over a set of table descriptors, relationship statements and
/// table definitions.
#[derive(Debug, Clone, Copy)]
pub struct SchemaRegistry<'a> {
    stats: &'a [TableDescriptor],
    relationships: &'a [&'a str],
    tables: &'a [&'a TableSchema],
    aggregate: &'a [&'a str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaIssue {
    MalformedRelationship {
        relationship: String,
        reason: String,
    },
    DanglingReference {
        relationship: String,
        table: String,
    },
    EmptyTable {
        table: String,
    },
    DuplicateTable {
        table: String,
    },
    MissingDefinition {
        table: String,
    },
    UnknownForeignTable {
        table: String,
        column: String,
        references: String,
    },
}

impl From<SchemaIssue> for SchemaError {
    fn from(issue: SchemaIssue) -> Self {
        match issue {
            SchemaIssue::MalformedRelationship {
                relationship,
                reason,
            } => SchemaError::MalformedRelationship {
                relationship,
                reason,
            },
            SchemaIssue::DanglingReference {
                relationship,
                table,
            } => SchemaError::DanglingReference {
                relationship,
                table,
            },
            SchemaIssue::EmptyTable { table } => SchemaError::EmptyTable { table },
            SchemaIssue::DuplicateTable { table } => SchemaError::DuplicateTable { table },
            SchemaIssue::MissingDefinition { table } => SchemaError::MissingDefinition { table },
            SchemaIssue::UnknownForeignTable {
                table,
                column,
                references,
            } => SchemaError::UnknownForeignTable {
                table,
                column,
                references,
            },
        }
    }
}

impl std::fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", SchemaError::from(self.clone()))
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemaReport {
    pub ok: bool,
    pub tables_checked: usize,
    pub relationships_checked: usize,
    pub issues: Vec<SchemaIssue>,
}

impl SchemaReport {
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn into_result(self) -> SchemaResult<()> {
        match self.issues.into_iter().next() {
            None => Ok(()),
            Some(issue) => Err(issue.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaSummary {
    pub described_tables: usize,
    pub defined_tables: usize,
    pub total_columns: u32,
    pub relationships: usize,
    pub functions: usize,
    pub declared_functions: u32,
    pub triggers: u32,
}

impl SchemaRegistry<'static> {
    pub fn builtin() -> Self {
        Self::new(TABLE_STATS, COMPLEX_RELATIONSHIPS, TABLES, AGGREGATE_SCHEMA)
    }

    pub fn functions(&self) -> &'static [FunctionSignature] {
        FUNCTIONS
    }

    pub fn find_function(&self, name: &str) -> SchemaResult<&'static FunctionSignature> {
        find_function(name).ok_or_else(|| SchemaError::UnknownFunction(name.to_string()))
    }
}

impl<'a> SchemaRegistry<'a> {
    pub fn new(
        stats: &'a [TableDescriptor],
        relationships: &'a [&'a str],
        tables: &'a [&'a TableSchema],
        aggregate: &'a [&'a str],
    ) -> Self {
        Self {
            stats,
            relationships,
            tables,
            aggregate,
        }
    }

    pub fn stats(&self) -> &'a [TableDescriptor] {
        self.stats
    }

    pub fn tables(&self) -> &'a [&'a TableSchema] {
        self.tables
    }

    pub fn raw_relationships(&self) -> &'a [&'a str] {
        self.relationships
    }

    pub fn relationships(&self) -> SchemaResult<Vec<Relationship>> {
        parse_all(self.relationships)
    }

    pub fn find_stats(&self, name: &str) -> SchemaResult<&'a TableDescriptor> {
        self.stats
            .iter()
            .find(|table| table.name == name)
            .ok_or_else(|| SchemaError::UnknownTable(name.to_string()))
    }

    pub fn find_table(&self, name: &str) -> SchemaResult<&'a TableSchema> {
        self.tables
            .iter()
            .copied()
            .find(|table| table.name == name)
            .ok_or_else(|| SchemaError::UnknownTable(name.to_string()))
    }

    /// Runs every consistency rule and collects all issues found.
    pub fn check(&self) -> SchemaReport {
        let mut issues = Vec::new();

        let mut seen = HashSet::new();
        for table in self.stats {
            if !seen.insert(table.name) {
                issues.push(SchemaIssue::DuplicateTable {
                    table: table.name.to_string(),
                });
            }
            if table.columns == 0 {
                issues.push(SchemaIssue::EmptyTable {
                    table: table.name.to_string(),
                });
            }
        }

        for raw in self.relationships {
            match Relationship::parse(raw) {
                Ok(relationship) => {
                    for table in relationship.tables() {
                        if !seen.contains(table) {
                            issues.push(SchemaIssue::DanglingReference {
                                relationship: raw.to_string(),
                                table: table.to_string(),
                            });
                        }
                    }
                }
                Err(SchemaError::MalformedRelationship {
                    relationship,
                    reason,
                }) => issues.push(SchemaIssue::MalformedRelationship {
                    relationship,
                    reason,
                }),
                Err(other) => issues.push(SchemaIssue::MalformedRelationship {
                    relationship: raw.to_string(),
                    reason: other.to_string(),
                }),
            }
        }

        let mut defined = HashSet::new();
        for table in self.tables {
            if !defined.insert(table.name) {
                issues.push(SchemaIssue::DuplicateTable {
                    table: table.name.to_string(),
                });
            }
            if table.columns.is_empty() {
                issues.push(SchemaIssue::EmptyTable {
                    table: table.name.to_string(),
                });
            }
        }

        for table in self.tables {
            for column in table.foreign_keys() {
                let Some(references) = column.references else {
                    continue;
                };
                if !defined.contains(references) {
                    issues.push(SchemaIssue::UnknownForeignTable {
                        table: table.name.to_string(),
                        column: column.name.to_string(),
                        references: references.to_string(),
                    });
                }
            }
        }

        for key in self.aggregate {
            if !defined.contains(key) {
                issues.push(SchemaIssue::MissingDefinition {
                    table: key.to_string(),
                });
            }
        }

        SchemaReport {
            ok: issues.is_empty(),
            tables_checked: self.stats.len() + self.tables.len(),
            relationships_checked: self.relationships.len(),
            issues,
        }
    }

    pub fn summary(&self) -> SchemaSummary {
        SchemaSummary {
            described_tables: self.stats.len(),
            defined_tables: self.tables.len(),
            total_columns: self.stats.iter().map(|table| table.columns).sum(),
            relationships: self.relationships.len(),
            functions: FUNCTIONS.len(),
            declared_functions: FUNCTIONS_COUNT,
            triggers: TRIGGERS_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::tables::{ColumnDef, ColumnType, TableGroup};

    static VIDEOS_ONLY: &[TableDescriptor] = &[
        TableDescriptor::new("videos", 12),
        TableDescriptor::new("recipes", 15),
    ];

    static TINY: TableSchema = TableSchema {
        name: "recipes",
        group: TableGroup::Main,
        columns: &[
            ColumnDef::primary_key(),
            ColumnDef::optional("video_id", ColumnType::Uuid).references("videos"),
        ],
    };

    #[test]
    fn builtin_registry_is_consistent() {
        let report = SchemaRegistry::builtin().check();
        assert!(report.is_ok(), "unexpected issues: {:?}", report.issues);
        assert!(report.ok);
        assert_eq!(report.relationships_checked, 6);
    }

    #[test]
    fn known_relationship_passes() {
        let registry = SchemaRegistry::new(VIDEOS_ONLY, &["recipes -> videos (1:1)"], &[], &[]);
        assert!(registry.check().into_result().is_ok());
    }

    #[test]
    fn typo_is_a_dangling_reference() {
        let registry = SchemaRegistry::new(VIDEOS_ONLY, &["recipes -> vidoes (1:1)"], &[], &[]);
        let err = registry.check().into_result().expect_err("should fail");
        assert_eq!(
            err,
            SchemaError::DanglingReference {
                relationship: "recipes -> vidoes (1:1)".to_string(),
                table: "vidoes".to_string(),
            }
        );
        assert!(err.to_string().starts_with("dangling reference"));
    }

    #[test]
    fn zero_columns_and_duplicates_are_reported() {
        let stats = [
            TableDescriptor::new("videos", 0),
            TableDescriptor::new("videos", 3),
        ];
        let report = SchemaRegistry::new(&stats, &[], &[], &[]).check();
        assert_eq!(
            report.issues,
            vec![
                SchemaIssue::EmptyTable {
                    table: "videos".to_string()
                },
                SchemaIssue::DuplicateTable {
                    table: "videos".to_string()
                },
            ]
        );
    }

    #[test]
    fn aggregate_keys_need_definitions() {
        let tables: [&TableSchema; 1] = [&TINY];
        let report = SchemaRegistry::new(&[], &[], &tables, &["recipes", "team_members"]).check();
        let kinds: Vec<_> = report.issues.iter().map(ToString::to_string).collect();
        assert_eq!(
            kinds,
            vec![
                "column 'recipes.video_id' references unknown table 'videos'".to_string(),
                "table 'team_members' is part of the aggregate schema but has no definition"
                    .to_string(),
            ]
        );
    }

    #[test]
    fn malformed_relationship_is_collected() {
        let report = SchemaRegistry::new(VIDEOS_ONLY, &["videos => recipes"], &[], &[]).check();
        assert!(matches!(
            report.issues.as_slice(),
            [SchemaIssue::MalformedRelationship { .. }]
        ));
        assert!(!report.ok);
    }

    static EMPTY: TableSchema = TableSchema {
        name: "videos",
        group: TableGroup::Main,
        columns: &[],
    };

    #[test]
    fn duplicate_definitions_are_reported() {
        let tables: [&TableSchema; 2] = [&TINY, &TINY];
        let report = SchemaRegistry::new(&[], &[], &tables, &[]).check();
        assert!(report.issues.contains(&SchemaIssue::DuplicateTable {
            table: "recipes".to_string()
        }));
        assert_eq!(report.tables_checked, 2);
    }

    #[test]
    fn definitions_without_columns_are_empty_tables() {
        let tables: [&TableSchema; 2] = [&TINY, &EMPTY];
        let report = SchemaRegistry::new(&[], &[], &tables, &[]).check();
        assert_eq!(
            report.issues,
            vec![SchemaIssue::EmptyTable {
                table: "videos".to_string()
            }]
        );
        assert_eq!(
            report.into_result(),
            Err(SchemaError::EmptyTable {
                table: "videos".to_string()
            })
        );
    }

    #[test]
    fn function_lookup_reports_unknown_names() {
        let registry = SchemaRegistry::builtin();
        assert_eq!(
            registry.find_function("is_admin").map(|f| f.name),
            Ok("is_admin")
        );
        assert_eq!(
            registry.find_function("is_root"),
            Err(SchemaError::UnknownFunction("is_root".to_string()))
        );
    }

    #[test]
    fn summary_counts_builtin_tables() {
        let summary = SchemaRegistry::builtin().summary();
        assert_eq!(summary.described_tables, 16);
        assert_eq!(summary.defined_tables, 23);
        assert_eq!(summary.total_columns, 141);
        assert_eq!(summary.functions, 17);
        assert_eq!(summary.declared_functions, 16);
        assert_eq!(summary.triggers, 6);
    }

    #[test]
    fn unknown_table_lookup() {
        let err = SchemaRegistry::builtin()
            .find_stats("nope")
            .expect_err("should fail");
        assert_eq!(err, SchemaError::UnknownTable("nope".to_string()));
    }
}
