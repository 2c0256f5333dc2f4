//! Names the subject of a check by the source text of its expression.
//!
//! Only expressions that read like a name are accepted: identifiers (including `self`), field
//! accesses on them (`order.total`, `pair.0`), numeric literals and dereferences of those
//! (`*value`). Any other expression has no name, and the caller must label it instead.

use syn::{Expr, Lit, Member, UnOp};

/// Returns the source text of the subject expression, if it has a name.
pub(crate) fn subject_name(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Path(path) if path.qself.is_none() => {
            path.path.get_ident().map(|ident| ident.to_string())
        }
        Expr::Field(field) => {
            let base = subject_name(&field.base)?;

            Some(match &field.member {
                Member::Named(ident) => format!("{}.{}", base, ident),
                Member::Unnamed(index) => format!("{}.{}", base, index.index),
            })
        }
        Expr::Lit(lit) => match &lit.lit {
            Lit::Int(int) => Some(int.base10_digits().to_string()),
            Lit::Float(float) => Some(float.base10_digits().to_string()),
            _ => None,
        },
        Expr::Unary(unary) => match unary.op {
            UnOp::Deref(_) => subject_name(&unary.expr).map(|name| format!("*{}", name)),
            _ => None,
        },
        // Expressions forwarded by `macro_rules!` arrive wrapped in an invisible group.
        Expr::Group(group) => subject_name(&group.expr),
        _ => None,
    }
}
