//! DuckDB connection wrapper with parameterized query execution.
//!
//! Rows come back as `serde_json::Value` maps keyed by column alias, which
//! [`Connection::execute_into`] then deserializes into typed records.

use std::collections::HashMap;
use std::path::Path;

use duckdb::{types::ValueRef, Connection as DuckDbConnection};
use serde::de::DeserializeOwned;

use crate::error::{ReportError, Result};
use crate::schema;

/// One handle to a DuckDB database.
///
/// Handles created with [`try_clone`](Self::try_clone) share the same
/// database instance, which is how the pool fans out over an in-memory
/// database.
#[derive(Debug)]
pub struct Connection {
    conn: DuckDbConnection,
}

impl Connection {
    /// Open (or create) a database file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = DuckDbConnection::open(path.as_ref())?;
        tracing::info!(path = %path.as_ref().display(), "opened database");
        Ok(Self { conn })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = DuckDbConnection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Open another handle on the same database.
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            conn: self.conn.try_clone()?,
        })
    }

    /// Create the reference tables if they do not exist yet.
    pub fn apply_schema(&self) -> Result<()> {
        self.execute_batch(schema::SCHEMA)
    }

    /// Run one or more statements that return no rows.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        tracing::debug!(sql, "executing batch");
        self.conn.execute_batch(sql)?;
        Ok(())
    }

    /// Execute SQL and return results as a `Vec` of `HashMap`s.
    ///
    /// Each row is keyed by column name; DuckDB values are converted to
    /// `serde_json::Value`.
    pub fn execute(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        tracing::debug!(sql, ?params, "executing query");
        let mut stmt = self.conn.prepare(sql)?;

        let param_values: Vec<&dyn duckdb::ToSql> = params
            .iter()
            .map(|p| p as &dyn duckdb::ToSql)
            .collect();

        let mut rows_result = stmt.query(param_values.as_slice())?;

        // Column metadata is only available once the statement has executed
        let executed = rows_result.as_ref().ok_or_else(|| {
            ReportError::UnknownQuery("statement produced no result metadata".to_string())
        })?;
        let column_names: Vec<String> = executed
            .column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();

        let mut out: Vec<HashMap<String, serde_json::Value>> = Vec::new();

        while let Some(row) = rows_result.next()? {
            let mut map = HashMap::with_capacity(column_names.len());
            for (i, col_name) in column_names.iter().enumerate() {
                let value = convert_value_ref(row.get_ref(i)?);
                map.insert(col_name.clone(), value);
            }
            out.push(map);
        }

        Ok(out)
    }

    /// Execute SQL and deserialize each row into type `T`.
    pub fn execute_into<T: DeserializeOwned>(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Vec<T>> {
        let rows = self.execute(sql, params)?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let value = serde_json::Value::Object(
                row.into_iter().collect::<serde_json::Map<String, serde_json::Value>>(),
            );
            let item: T = serde_json::from_value(value)?;
            results.push(item);
        }
        Ok(results)
    }

    /// Execute SQL and return the first column of the first row.
    ///
    /// Returns `None` if the result set is empty.
    pub fn execute_scalar(
        &self,
        sql: &str,
        params: &[String],
    ) -> Result<Option<serde_json::Value>> {
        let mut stmt = self.conn.prepare(sql)?;
        let param_values: Vec<&dyn duckdb::ToSql> = params
            .iter()
            .map(|p| p as &dyn duckdb::ToSql)
            .collect();

        let mut rows = stmt.query(param_values.as_slice())?;

        if let Some(row) = rows.next()? {
            Ok(Some(convert_value_ref(row.get_ref(0)?)))
        } else {
            Ok(None)
        }
    }

    /// Append rows from a newline-delimited JSON file to an existing table.
    ///
    /// Fields are matched to columns by name, so files may omit nullable
    /// columns or list fields in any order.
    pub fn load_ndjson(&self, table_name: &str, ndjson_path: &str) -> Result<usize> {
        if !is_identifier(table_name) {
            return Err(ReportError::InvalidParameter(format!(
                "'{}' is not a valid table name",
                table_name
            )));
        }
        let path_fwd = ndjson_path.replace('\\', "/").replace('\'', "''");
        let inserted = self.conn.execute(
            &format!(
                "INSERT INTO {} BY NAME \
                 SELECT * FROM read_json_auto('{}', format='newline_delimited')",
                table_name, path_fwd
            ),
            [],
        )?;
        tracing::debug!(table = table_name, rows = inserted, "loaded ndjson");
        Ok(inserted)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Convert a DuckDB `ValueRef` to a `serde_json::Value`.
fn convert_value_ref(val: ValueRef<'_>) -> serde_json::Value {
    match val {
        ValueRef::Null => serde_json::Value::Null,
        ValueRef::Boolean(b) => serde_json::Value::Bool(b),
        ValueRef::TinyInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::SmallInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::Int(n) => serde_json::Value::Number(n.into()),
        ValueRef::BigInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::UTinyInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::USmallInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::UInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::UBigInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::HugeInt(n) => {
            // SUM over integers yields HUGEINT; totals that overflow i64 stay textual
            if let Ok(i) = i64::try_from(n) {
                serde_json::Value::Number(i.into())
            } else {
                serde_json::Value::String(n.to_string())
            }
        }
        ValueRef::Float(f) => serde_json::Number::from_f64(f as f64)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Double(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Text(bytes) => {
            serde_json::Value::String(String::from_utf8_lossy(bytes).to_string())
        }
        // Dates, timestamps and decimals are formatted or cast in SQL
        _ => serde_json::Value::Null,
    }
}
