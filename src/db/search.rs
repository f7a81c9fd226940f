//! SQL builder for fragment search over CPF and MAC columns.

use super::RECORD_COLUMNS;

/// Hard cap on rows returned by a search.
pub const SEARCH_LIMIT: i64 = 100;

/// SQL text plus its positional parameters, in bind order.
///
/// User fragments only ever travel as bound parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    sql: String,
    params: Vec<String>,
}

impl SearchQuery {
    /// Build the query for optional CPF and MAC fragments.
    ///
    /// The MAC fragment is uppercased to match stored casing. Both are
    /// wrapped as `%fragment%`. Predicates are ANDed, CPF first.
    pub fn new(cpf: Option<&str>, mac: Option<&str>) -> Self {
        let mut sql = format!("SELECT {RECORD_COLUMNS} FROM logs WHERE 1=1");
        let mut params = Vec::new();

        if let Some(cpf) = cpf {
            params.push(format!("%{cpf}%"));
            sql.push_str(&format!(" AND cpf LIKE ${}", params.len()));
        }
        if let Some(mac) = mac {
            params.push(format!("%{}%", mac.to_uppercase()));
            sql.push_str(&format!(" AND mac_address LIKE ${}", params.len()));
        }

        sql.push_str(&format!(" ORDER BY horario DESC LIMIT {SEARCH_LIMIT}"));
        SearchQuery { sql, params }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }
}
