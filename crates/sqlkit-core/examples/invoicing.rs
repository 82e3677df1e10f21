//! Invoicing System - Query IR Example
//!
//! Builds the statements an invoicing backend issues and prints them for
//! the general and PostgreSQL dialects:
//! - Outstanding invoices per client, joined to their company
//! - Revenue totals grouped by currency
//! - Invoice lifecycle updates (draft -> sent -> paid)
//!
//! Run with: cargo run --example invoicing

use sqlkit_core::data::{
    Column, Comparison, ComputedColumn, DataQuery, Join, JoinMethod, OrderBy, Predicate,
    PredicateGroup, PredicateValue,
};
use sqlkit_core::{Dialect, PostgresDialect, Serializer};

fn outstanding_invoices() -> DataQuery {
    DataQuery::select("invoices")
        .join(Join::inner(
            Column::qualified("invoices", "client_id"),
            Column::qualified("clients", "id"),
        ))
        .join(Join::new(
            JoinMethod::Left,
            Column::qualified("clients", "company_id"),
            Column::qualified("companies", "id"),
        ))
        .filter(Predicate::placeholder(
            Column::qualified("invoices", "company_id"),
            Comparison::Equal,
        ))
        .filter(PredicateGroup::or(vec![
            Predicate::in_list(Column::qualified("invoices", "status"), 2).into(),
            Predicate::new(
                Column::qualified("invoices", "due_date"),
                Comparison::LessThan,
                PredicateValue::Custom(String::from("CURRENT_DATE")),
            )
            .into(),
        ]))
        .filter(Predicate::is_null(Column::qualified("invoices", "paid_at")))
        .order_by(OrderBy::ascending(Column::qualified("invoices", "due_date")))
        .limit(25)
}

fn revenue_by_currency() -> DataQuery {
    DataQuery::select("invoices")
        .column("currency")
        .computed(
            ComputedColumn::new("SUM")
                .argument(Column::new("total_cents"))
                .alias("revenue"),
        )
        .computed(ComputedColumn::count_all().alias("invoices"))
        .filter(Predicate::between("issued_at"))
        .group_by(Column::new("currency"))
        .order_by(OrderBy::descending(Column::new("currency")))
}

fn mark_sent() -> DataQuery {
    DataQuery::update("invoices")
        .column("status")
        .column("sent_at")
        .filter(Predicate::placeholder("id", Comparison::Equal))
}

fn new_line_item() -> DataQuery {
    DataQuery::insert("line_items")
        .column("invoice_id")
        .column("description")
        .column("quantity")
        .column("unit_price_cents")
}

fn print_all<D: Dialect>(dialect: D) {
    let serializer = Serializer::new(dialect);
    println!("-- {} --", serializer.dialect().name());

    let queries = [
        ("Outstanding invoices", outstanding_invoices()),
        ("Revenue by currency", revenue_by_currency()),
        ("Mark invoice sent", mark_sent()),
        ("New line item", new_line_item()),
    ];
    for (title, query) in &queries {
        match serializer.serialize(query) {
            Ok(rendered) => {
                let binds: Vec<&str> = rendered.binds.iter().map(|b| b.name.as_str()).collect();
                println!("{title}:\n  {rendered}\n  binds: {binds:?}");
            }
            Err(e) => println!("{title}: {e}"),
        }
    }
    println!();
}

fn main() {
    print_all(sqlkit_core::GeneralDialect::new());
    print_all(PostgresDialect::new());
}
