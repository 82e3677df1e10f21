//! Predicates, predicate groups and comparisons.

use super::{Bind, Serializer};
use crate::data::{
    Comparison, Predicate, PredicateGroup, PredicateGroupRelation, PredicateItem, PredicateValue,
    StatementKind,
};
use crate::dialect::Dialect;
use crate::error::{Result, SerializeError, MAX_PLACEHOLDERS};

impl<D: Dialect> Serializer<D> {
    /// Renders `(<member> <relation> <member> ...)`.
    pub fn serialize_predicate_group(&self, group: &PredicateGroup) -> Result<String> {
        self.write_predicate_group(group, &mut Vec::new())
    }

    /// Renders a predicate or a nested group.
    pub fn serialize_predicate_item(&self, item: &PredicateItem) -> Result<String> {
        self.write_predicate_item(item, &mut Vec::new())
    }

    /// Renders `<column> <operator> [<value>]`.
    pub fn serialize_predicate(&self, predicate: &Predicate) -> Result<String> {
        self.write_predicate(predicate, &mut Vec::new())
    }

    /// Returns the operator text for `comparison`.
    #[must_use]
    pub fn serialize_comparison(&self, comparison: &Comparison) -> String {
        String::from(self.dialect.comparison_operator(comparison))
    }

    /// Returns the keyword joining a group's members.
    #[must_use]
    pub fn serialize_relation(&self, relation: &PredicateGroupRelation) -> String {
        String::from(relation.as_sql())
    }

    /// Renders the placeholder(s) standing for one value of `predicate`:
    /// `? AND ?` for `BETWEEN`, a single `?` otherwise. Positions start
    /// at 1.
    #[must_use]
    pub fn make_placeholder(&self, predicate: &Predicate) -> String {
        self.write_placeholder(predicate, &mut Vec::new())
    }

    pub(super) fn write_predicate_group(
        &self,
        group: &PredicateGroup,
        binds: &mut Vec<Bind>,
    ) -> Result<String> {
        self.write_members(&group.relation, &group.predicates, binds)
    }

    /// Shared by explicit groups and the implicit `AND` group of a WHERE
    /// clause.
    pub(super) fn write_members(
        &self,
        relation: &PredicateGroupRelation,
        items: &[PredicateItem],
        binds: &mut Vec<Bind>,
    ) -> Result<String> {
        if items.is_empty() {
            return Err(SerializeError::EmptyPredicateGroup);
        }
        let keyword = self.serialize_relation(relation);
        if keyword.trim().is_empty() {
            return Err(SerializeError::EmptyRelation);
        }

        let members = items
            .iter()
            .map(|item| self.write_predicate_item(item, binds))
            .collect::<Result<Vec<_>>>()?;
        Ok(format!("({})", members.join(&format!(" {keyword} "))))
    }

    fn write_predicate_item(&self, item: &PredicateItem, binds: &mut Vec<Bind>) -> Result<String> {
        match item {
            PredicateItem::Predicate(predicate) => self.write_predicate(predicate, binds),
            PredicateItem::Group(group) => self.write_predicate_group(group, binds),
        }
    }

    fn write_predicate(&self, predicate: &Predicate, binds: &mut Vec<Bind>) -> Result<String> {
        let mut parts = vec![self.serialize_column(&predicate.column)?];

        let operator = self.serialize_comparison(&predicate.comparison);
        if !operator.is_empty() {
            parts.push(operator);
        }

        // IS NULL / IS NOT NULL never take a right-hand side.
        if !predicate.comparison.discards_value() {
            if let Some(value) = self.write_value(predicate, binds)? {
                parts.push(value);
            }
        }

        Ok(parts.join(" "))
    }

    fn write_value(&self, predicate: &Predicate, binds: &mut Vec<Bind>) -> Result<Option<String>> {
        let value = match &predicate.value {
            PredicateValue::Placeholders(0) => {
                return Err(SerializeError::EmptyPlaceholderList {
                    column: predicate.column.name.clone(),
                });
            }
            PredicateValue::Placeholders(count) if *count > MAX_PLACEHOLDERS => {
                return Err(SerializeError::TooManyPlaceholders {
                    column: predicate.column.name.clone(),
                    count: *count,
                });
            }
            PredicateValue::Placeholders(count)
                if *count != 1 && predicate.comparison == Comparison::Between =>
            {
                return Err(SerializeError::BetweenArity {
                    column: predicate.column.name.clone(),
                    count: *count,
                });
            }
            PredicateValue::Placeholders(1) => self.write_placeholder(predicate, binds),
            PredicateValue::Placeholders(count) => {
                let placeholders: Vec<String> = (0..*count)
                    .map(|_| self.write_placeholder(predicate, binds))
                    .collect();
                format!("({})", placeholders.join(", "))
            }
            PredicateValue::Column(column) => self.serialize_column(column)?,
            PredicateValue::Subquery(query) if query.statement != StatementKind::Select => {
                return Err(SerializeError::NonSelectSubquery {
                    statement: query.statement,
                });
            }
            PredicateValue::Subquery(query) => format!("({})", self.write_query(query, binds)?),
            PredicateValue::Custom(sql) if !sql.is_empty() => sql.clone(),
            PredicateValue::Custom(_) | PredicateValue::None => return Ok(None),
        };
        Ok(Some(value))
    }

    fn write_placeholder(&self, predicate: &Predicate, binds: &mut Vec<Bind>) -> String {
        let name = &predicate.column.name;
        match predicate.comparison {
            Comparison::Between => {
                let min = self.bind(format!("{name}.min"), binds);
                let max = self.bind(format!("{name}.max"), binds);
                format!("{min} AND {max}")
            }
            _ => self.bind(name.clone(), binds),
        }
    }
}
