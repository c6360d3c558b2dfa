//! Noyau arbre d'expression
//!
//! Organisation interne :
//! - expr.rs    : AST + opérations récursives (rendu, évaluation, inverse,
//!                variables, moyenne géométrique)
//! - jetons.rs  : tokenisation
//! - analyse.rs : shunting-yard (deux piles) -> Expr
//! - erreurs.rs : erreurs d'analyse + d'évaluation

pub mod analyse;
pub mod erreurs;
pub mod expr;
pub mod jetons;

#[cfg(test)]
mod tests_expr;


// API publique minimale
pub use analyse::analyser;
pub use erreurs::ErreurExpr;
pub use expr::{Expr, Valeurs};
