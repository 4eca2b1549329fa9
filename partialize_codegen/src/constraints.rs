use crate::model::{Constraint, ConstraintClause};

/// Keeps every clause with at least one term other than `notnull`.
///
/// Whole clauses are kept or dropped: `where T : notnull` disappears, while
/// `where T : class, notnull` survives untouched, `notnull` included.
pub fn surviving_clauses(clauses: &[ConstraintClause]) -> Vec<ConstraintClause> {
    clauses.iter()
        .filter(|clause| clause.constraints.iter().any(|term| *term != Constraint::NotNull))
        .cloned()
        .collect()
}
