// src/main.rs
//
// Démonstration (hors noyau) : affecte x et y, analyse une expression,
// puis passe en revue chaque opération du noyau en affichant son résultat.

use arbre_expression::{analyser, ErreurExpr, Expr, Valeurs};

fn main() -> Result<(), ErreurExpr> {
    let mut valeurs = Valeurs::new();
    // libre d'en changer ou d'en ajouter ici
    valeurs.insert("x".to_string(), 10.0);
    valeurs.insert("y".to_string(), 27.0);

    let expr = analyser("4*x + y/9 + 12")?;

    println!("infixe        : {expr}");
    println!("postfixe      : {}", expr.postfixe());
    println!("évaluation    : {}", expr.evaluer(&valeurs)?);
    println!("inverse       : {}", expr.inverse());
    println!("inverse (num) : {}", Expr::nombre(7.0).inverse());
    println!("inverse (div) : {}", analyser("x / 10")?.inverse());
    println!("variables     : {:?}", expr.variables());

    let moyenne = Expr::moyenne_geometrique(&[4.0, 9.0, 3.0, 7.0, 6.0]);
    println!("moyenne géom. : {moyenne}");
    println!("elle vaut     : {}", moyenne.evaluer(&valeurs)?);

    Ok(())
}
