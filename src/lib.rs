//! Arbre d'expression arithmétique
//!
//! Analyse d'expressions infixes (nombres, variables, `+ - * / ^`,
//! parenthèses) en arbre binaire, puis opérations sur cet arbre :
//! rendu infixe/postfixe, évaluation contre des affectations de variables,
//! inverse algébrique, collecte des variables, moyenne géométrique
//! symbolique.
//!
//! Tout est synchrone, sans E/S, et les arbres sont des valeurs immuables
//! après construction (copie profonde via `Clone`).

pub mod noyau;

pub use noyau::{analyser, ErreurExpr, Expr, Valeurs};
