mod eval;
mod expr;


pub use eval::eval;
pub use expr::{Cmp, FilterClause, FilterExpr};
