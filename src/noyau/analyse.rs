// src/noyau/analyse.rs
//
// Shunting-yard -> Expr, en DEUX piles explicites :
// - une pile d'opérateurs en attente (jetons, parenthèses comprises)
// - une pile d'opérandes déjà construits (Expr)
//
// Règles:
// - Num / Ident : directement sur la pile d'opérandes
// - '(' : empilé côté opérateurs ; ')' : on applique jusqu'à retrouver '('
// - opérateur binaire de précédence p : tant que le sommet n'est pas '('
//   et que sa précédence n'est PAS strictement inférieure à p, on applique,
//   puis on empile le nouveau venu
// - fin d'entrée : on applique tout ce qui reste
//
// NOTE:
// - La règle ci-dessus rend TOUS les opérateurs associatifs à gauche,
//   '^' compris : 2^3^2 se lit (2^3)^2, pas la convention mathématique.
//   Comportement historique conservé tel quel, ne pas "corriger".
// - Analyse permissive : entrée mal formée => ErreurExpr::Analyse, sans
//   diagnostic précis ni récupération.

use super::erreurs::ErreurExpr;
use super::expr::Expr;
use super::jetons::{tokenize, Tok};

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Caret => 3,
        _ => 0,
    }
}

fn symbole(t: &Tok) -> &'static str {
    match t {
        Tok::Plus => "+",
        Tok::Minus => "-",
        Tok::Star => "*",
        Tok::Slash => "/",
        Tok::Caret => "^",
        _ => "?",
    }
}

/// Dépile un opérateur + ses deux opérandes (droit d'abord), rempile le
/// noeud Op construit.
fn applique_sommet(operateurs: &mut Vec<Tok>, operandes: &mut Vec<Expr>) -> Result<(), ErreurExpr> {
    let op = operateurs
        .pop()
        .ok_or_else(|| ErreurExpr::Analyse("expression invalide".into()))?;

    if matches!(op, Tok::LPar) {
        return Err(ErreurExpr::Analyse("parenthèses non fermées".into()));
    }

    let droite = operandes
        .pop()
        .ok_or_else(|| ErreurExpr::Analyse("expression invalide".into()))?;
    let gauche = operandes
        .pop()
        .ok_or_else(|| ErreurExpr::Analyse("expression invalide".into()))?;

    operandes.push(Expr::op(gauche, symbole(&op), droite));
    Ok(())
}

/// Analyse une chaîne infixe en arbre d'expression.
///
/// Parseur rapide et permissif : il suppose une entrée bien formée et se
/// contente d'échouer visiblement sinon.
pub fn analyser(entree: &str) -> Result<Expr, ErreurExpr> {
    let jetons = tokenize(entree)?;

    let mut operateurs: Vec<Tok> = Vec::new();
    let mut operandes: Vec<Expr> = Vec::new();

    for jeton in jetons {
        match jeton {
            Tok::Num(v) => operandes.push(Expr::Nombre(v)),
            Tok::Ident(nom) => operandes.push(Expr::Var(nom)),

            Tok::LPar => operateurs.push(jeton),

            Tok::RPar => loop {
                match operateurs.last() {
                    Some(Tok::LPar) => {
                        operateurs.pop();
                        break;
                    }
                    Some(_) => applique_sommet(&mut operateurs, &mut operandes)?,
                    None => {
                        return Err(ErreurExpr::Analyse(
                            "parenthèse fermante sans ouvrante".into(),
                        ));
                    }
                }
            },

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let p = precedence(&jeton);

                while let Some(sommet) = operateurs.last() {
                    if matches!(sommet, Tok::LPar) || precedence(sommet) < p {
                        break;
                    }
                    applique_sommet(&mut operateurs, &mut operandes)?;
                }

                operateurs.push(jeton);
            }
        }
    }

    // vide la pile d'opérateurs ('(' restant => non fermée)
    while !operateurs.is_empty() {
        applique_sommet(&mut operateurs, &mut operandes)?;
    }

    let resultat = operandes
        .pop()
        .ok_or_else(|| ErreurExpr::Analyse("entrée vide".into()))?;

    if !operandes.is_empty() {
        return Err(ErreurExpr::Analyse("expression invalide".into()));
    }

    Ok(resultat)
}
