//! Repositories wrapping database access for each table.
//!
//! Repositories own query construction and timestamp bookkeeping; they never
//! publish events or enforce form-level validation, which belong to the
//! service layer above.

pub mod application;
pub mod area;
pub mod inventory;
pub mod people;

use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::sea_query::ExprTrait;
use sea_orm::ColumnTrait;

/// Case-insensitive substring match for search filters.
///
/// Lowercases both the column and the term so the match behaves the same on
/// Postgres (where bare LIKE is case-sensitive) and on the SQLite test
/// backend.
pub(crate) fn contains_ci<C: ColumnTrait>(column: C, term: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).like(format!("%{}%", term.to_lowercase()))
}
