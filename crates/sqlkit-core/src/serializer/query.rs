//! Statement assembly.
//!
//! Clauses are emitted in fixed SQL order and joined by single spaces.
//! A clause whose collection is empty, or whose value is absent, is left
//! out entirely.

use super::{Bind, Serializer};
use crate::data::{
    ComputedArgument, ComputedColumn, DataQuery, GroupBy, Join, JoinMethod, OrderBy,
    PredicateGroupRelation, StatementKind,
};
use crate::dialect::Dialect;
use crate::error::{IdentifierKind, Result, SerializeError};

impl<D: Dialect> Serializer<D> {
    /// Renders `FUNCTION(arg, ...) [AS alias]`.
    pub fn serialize_computed(&self, computed: &ComputedColumn) -> Result<String> {
        let mut sql = self.write_call(computed)?;
        if let Some(alias) = &computed.alias {
            sql.push_str(" AS ");
            sql.push_str(&self.escape(alias, IdentifierKind::Alias)?);
        }
        Ok(sql)
    }

    /// Renders `<METHOD> JOIN <foreign table> ON <local> = <foreign>`.
    pub fn serialize_join(&self, join: &Join) -> Result<String> {
        let Some(table) = &join.foreign.table else {
            return Err(SerializeError::UnqualifiedJoinColumn {
                column: join.foreign.name.clone(),
            });
        };
        if matches!(&join.method, JoinMethod::Custom(method) if method.trim().is_empty()) {
            return Err(SerializeError::EmptyCustomSql {
                part: "JOIN method",
            });
        }
        Ok(format!(
            "{} {} ON {} = {}",
            join.method.keyword(),
            self.escape(table, IdentifierKind::Table)?,
            self.serialize_column(&join.local)?,
            self.serialize_column(&join.foreign)?
        ))
    }

    /// Renders one `GROUP BY` entry.
    pub fn serialize_group_by(&self, group_by: &GroupBy) -> Result<String> {
        match group_by {
            GroupBy::Column(column) => self.serialize_column(column),
            GroupBy::Custom(sql) if sql.trim().is_empty() => {
                Err(SerializeError::EmptyCustomSql { part: "GROUP BY" })
            }
            GroupBy::Custom(sql) => Ok(sql.clone()),
        }
    }

    /// Renders one `ORDER BY` entry.
    pub fn serialize_order_by(&self, order_by: &OrderBy) -> Result<String> {
        let column = self.serialize_column(&order_by.column)?;
        let direction = order_by.direction.as_sql();
        if direction.is_empty() {
            return Ok(column);
        }
        Ok(format!("{column} {direction}"))
    }

    pub(super) fn write_query(&self, query: &DataQuery, binds: &mut Vec<Bind>) -> Result<String> {
        check_clauses(query)?;

        let table = self.escape(&query.table, IdentifierKind::Table)?;
        let mut sql = vec![String::from(query.statement.as_str())];

        match query.statement {
            StatementKind::Select => {
                if query.distinct {
                    sql.push(String::from("DISTINCT"));
                }
                sql.push(self.write_projection(query, &table)?);
                sql.push(format!("FROM {table}"));
            }
            StatementKind::Insert => {
                let mut columns = Vec::with_capacity(query.columns.len());
                let mut values = Vec::with_capacity(query.columns.len());
                for column in &query.columns {
                    columns.push(self.escape(&column.name, IdentifierKind::Column)?);
                    values.push(self.bind(column.name.clone(), binds));
                }
                sql.push(table);
                sql.push(format!("({})", columns.join(", ")));
                sql.push(String::from("VALUES"));
                sql.push(format!("({})", values.join(", ")));
            }
            StatementKind::Update => {
                let mut assignments = Vec::with_capacity(query.columns.len());
                for column in &query.columns {
                    let name = self.escape(&column.name, IdentifierKind::Column)?;
                    let value = self.bind(column.name.clone(), binds);
                    assignments.push(format!("{name} = {value}"));
                }
                sql.push(table);
                sql.push(String::from("SET"));
                sql.push(assignments.join(", "));
            }
            StatementKind::Delete => sql.push(table),
        }

        for join in &query.joins {
            sql.push(self.serialize_join(join)?);
        }

        if !query.predicates.is_empty() {
            sql.push(String::from("WHERE"));
            sql.push(self.write_members(&PredicateGroupRelation::And, &query.predicates, binds)?);
        }

        if !query.group_bys.is_empty() {
            let group_bys = query
                .group_bys
                .iter()
                .map(|group_by| self.serialize_group_by(group_by))
                .collect::<Result<Vec<_>>>()?;
            sql.push(format!("GROUP BY {}", group_bys.join(", ")));
        }

        if !query.order_bys.is_empty() {
            let order_bys = query
                .order_bys
                .iter()
                .map(|order_by| self.serialize_order_by(order_by))
                .collect::<Result<Vec<_>>>()?;
            sql.push(format!("ORDER BY {}", order_bys.join(", ")));
        }

        if let Some(n) = query.limit {
            sql.push(format!("LIMIT {n}"));
        }

        if let Some(n) = query.offset {
            sql.push(format!("OFFSET {n}"));
        }

        Ok(sql.join(" "))
    }

    /// With joins present a bare `*` would also pull every joined column,
    /// so an empty projection is scoped to the driving table.
    fn write_projection(&self, query: &DataQuery, table: &str) -> Result<String> {
        let mut columns = query
            .columns
            .iter()
            .map(|column| self.serialize_column(column))
            .collect::<Result<Vec<_>>>()?;
        for computed in &query.computed {
            columns.push(self.serialize_computed(computed)?);
        }

        if !columns.is_empty() {
            return Ok(columns.join(", "));
        }
        if query.joins.is_empty() {
            Ok(String::from("*"))
        } else {
            Ok(format!("{table}.*"))
        }
    }

    fn write_call(&self, computed: &ComputedColumn) -> Result<String> {
        if computed.function.is_empty() {
            return Err(SerializeError::EmptyIdentifier {
                kind: IdentifierKind::Function,
            });
        }
        let arguments = computed
            .arguments
            .iter()
            .map(|argument| match argument {
                ComputedArgument::Column(column) => self.serialize_column(column),
                ComputedArgument::Computed(nested) => self.write_call(nested),
                ComputedArgument::Wildcard => Ok(String::from("*")),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(format!("{}({})", computed.function, arguments.join(", ")))
    }
}

/// Rejects clauses the statement kind cannot carry.
fn check_clauses(query: &DataQuery) -> Result<()> {
    let statement = query.statement;
    let writes = matches!(statement, StatementKind::Insert | StatementKind::Update);

    let mut present = vec![
        (query.distinct, "DISTINCT"),
        (!query.computed.is_empty(), "computed columns"),
        (!query.joins.is_empty(), "JOIN"),
        (!query.group_bys.is_empty(), "GROUP BY"),
        (!query.order_bys.is_empty(), "ORDER BY"),
        (query.limit.is_some(), "LIMIT"),
        (query.offset.is_some(), "OFFSET"),
    ];
    match statement {
        StatementKind::Select => return Ok(()),
        StatementKind::Insert => present.push((!query.predicates.is_empty(), "WHERE")),
        StatementKind::Delete => present.push((!query.columns.is_empty(), "a column list")),
        StatementKind::Update => {}
    }

    if let Some((_, clause)) = present.into_iter().find(|(set, _)| *set) {
        return Err(SerializeError::UnsupportedClause { statement, clause });
    }
    if writes && query.columns.is_empty() {
        return Err(SerializeError::EmptyColumnList { statement });
    }
    Ok(())
}
