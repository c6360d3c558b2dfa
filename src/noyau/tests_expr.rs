//! Tests de l'arbre : rendu, clone, évaluation, inverse, variables,
//! moyenne géométrique.
//!
//! Notes :
//! - La validation est DIFFÉRÉE : construire un Op avec un symbole invalide
//!   ou une Var sans valeur doit passer ; seule l'évaluation échoue.
//! - Les comparaisons flottantes passent par une tolérance explicite.

use std::collections::HashSet;

use super::analyser;
use super::erreurs::ErreurExpr;
use super::expr::{Expr, Valeurs};

fn valeurs_xy() -> Valeurs {
    let mut v = Valeurs::new();
    v.insert("x".to_string(), 10.0);
    v.insert("y".to_string(), 27.0);
    v
}

fn assert_proche(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "attendu {b}, obtenu {a}");
}

/* ------------------------ Construction + rendu ------------------------ */

#[test]
fn rendu_feuilles() {
    assert_eq!(Expr::nombre(4.0).to_string(), "4");
    assert_eq!(Expr::nombre(3.5).to_string(), "3.5");
    assert_eq!(Expr::var("x").to_string(), "x");
}

#[test]
fn rendu_infixe_toujours_parenthese() {
    let e = Expr::op(
        Expr::op(Expr::nombre(4.0), "*", Expr::var("x")),
        "+",
        Expr::nombre(1.0),
    );
    assert_eq!(e.to_string(), "((4 * x) + 1)");
}

#[test]
fn rendu_postfixe() {
    let e = Expr::op(
        Expr::op(Expr::nombre(4.0), "*", Expr::var("x")),
        "+",
        Expr::nombre(1.0),
    );
    assert_eq!(e.postfixe(), "4 x * 1 +");
}

#[test]
fn infixe_minimal_retombe_sur_le_rendu_complet() {
    let e = Expr::op(Expr::nombre(1.0), "+", Expr::var("x"));
    assert_eq!(e.infixe_minimal(), e.to_string());
}

#[test]
fn classification() {
    assert!(Expr::nombre(1.0).est_nombre());
    assert!(Expr::var("x").est_var());
    assert!(Expr::op(Expr::nombre(1.0), "+", Expr::nombre(2.0)).est_operateur());
    assert!(!Expr::var("x").est_nombre());
}

/* ------------------------ Clone ------------------------ */

#[test]
fn clone_structurel_et_independant() {
    let e = Expr::op(
        Expr::op(Expr::var("x"), "^", Expr::nombre(2.0)),
        "-",
        Expr::var("y"),
    );
    let copie = e.clone();

    // égalité structurelle
    assert_eq!(copie, e);

    // indépendance : consommer l'original dans un arbre plus grand
    // ne touche pas la copie
    let plus_grand = Expr::op(e, "+", Expr::nombre(1.0));
    assert_eq!(copie.to_string(), "((x ^ 2) - y)");
    assert_eq!(plus_grand.to_string(), "(((x ^ 2) - y) + 1)");
}

/* ------------------------ Évaluation ------------------------ */

#[test]
fn evaluation_cinq_operateurs() {
    let v = Valeurs::new();
    let cas = [("2 + 3", 5.0), ("2 - 3", -1.0), ("2 * 3", 6.0), ("2 / 4", 0.5), ("2 ^ 10", 1024.0)];
    for (texte, attendu) in cas {
        let e = analyser(texte).unwrap();
        assert_proche(e.evaluer(&v).unwrap(), attendu);
    }
}

#[test]
fn evaluation_concrete() {
    // 4*10 + 27/9 + 12 = 55
    let e = analyser("4*x + y/9 + 12").unwrap();
    assert_proche(e.evaluer(&valeurs_xy()).unwrap(), 55.0);
}

#[test]
fn division_par_zero_suit_la_semantique_f64() {
    // pas une erreur : inf (resp. NaN pour 0/0)
    let v = Valeurs::new();
    let inf = analyser("1 / 0").unwrap().evaluer(&v).unwrap();
    assert!(inf.is_infinite() && inf > 0.0);

    let nan = analyser("0 / 0").unwrap().evaluer(&v).unwrap();
    assert!(nan.is_nan());
}

#[test]
fn variable_libre_echoue_distinctement() {
    let e = Expr::op(Expr::var("z"), "+", Expr::nombre(1.0));
    let err = e.evaluer(&valeurs_xy()).unwrap_err();
    assert_eq!(err, ErreurExpr::VariableLibre("z".to_string()));
}

#[test]
fn operateur_invalide_detecte_seulement_a_l_evaluation() {
    // la construction et le rendu passent...
    let e = Expr::op(Expr::nombre(1.0), "%", Expr::nombre(2.0));
    assert_eq!(e.to_string(), "(1 % 2)");

    // ...seule l'évaluation échoue
    let err = e.evaluer(&Valeurs::new()).unwrap_err();
    assert_eq!(err, ErreurExpr::OperateurInconnu("%".to_string()));
}

/* ------------------------ Inverse ------------------------ */

#[test]
fn inverse_nombre() {
    let e = Expr::nombre(7.0).inverse();
    assert_eq!(e, Expr::nombre(1.0 / 7.0));
    assert_proche(e.evaluer(&Valeurs::new()).unwrap(), 1.0 / 7.0);
}

#[test]
fn inverse_division_echange_les_enfants() {
    let e = analyser("x / 10").unwrap().inverse();
    assert_eq!(e, analyser("10 / x").unwrap());

    let mut v = Valeurs::new();
    v.insert("x".to_string(), 4.0);
    assert_proche(e.evaluer(&v).unwrap(), 2.5);
}

#[test]
fn inverse_cas_general_enveloppe_dans_une_division() {
    let e = Expr::var("x").inverse();
    assert_eq!(e, Expr::op(Expr::nombre(1.0), "/", Expr::var("x")));

    let somme = analyser("x + 1").unwrap();
    assert_eq!(somme.inverse().to_string(), "(1 / (x + 1))");
}

#[test]
fn inverse_double_est_l_identite_en_valeur() {
    let v = valeurs_xy();
    for texte in ["7", "x / 10", "4*x + y/9 + 12", "x ^ 2"] {
        let e = analyser(texte).unwrap();
        let double = e.inverse().inverse();
        assert_proche(double.evaluer(&v).unwrap(), e.evaluer(&v).unwrap());
    }
}

/* ------------------------ Variables ------------------------ */

#[test]
fn collecte_des_variables() {
    let e = analyser("4*x + y/9 + 12").unwrap();
    let attendu: HashSet<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
    assert_eq!(e.variables(), attendu);
}

#[test]
fn collecte_sans_doublons_ni_nombres() {
    let e = analyser("x * x + y - x").unwrap();
    let attendu: HashSet<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
    assert_eq!(e.variables(), attendu);

    assert!(analyser("1 + 2 * 3").unwrap().variables().is_empty());
}

/* ------------------------ Moyenne géométrique ------------------------ */

#[test]
fn moyenne_geometrique_vide() {
    let e = Expr::moyenne_geometrique(&[]);
    assert_eq!(e, Expr::nombre(0.0));
    assert_proche(e.evaluer(&Valeurs::new()).unwrap(), 0.0);
}

#[test]
fn moyenne_geometrique_singleton() {
    // x ^ (1/1) = x
    let e = Expr::moyenne_geometrique(&[42.0]);
    assert_eq!(e.to_string(), "(42 ^ 1)");
    assert_proche(e.evaluer(&Valeurs::new()).unwrap(), 42.0);
}

#[test]
fn moyenne_geometrique_produit_associe_a_gauche() {
    let e = Expr::moyenne_geometrique(&[4.0, 9.0, 3.0, 7.0, 6.0]);
    assert_eq!(e.to_string(), "(((((4 * 9) * 3) * 7) * 6) ^ 0.2)");
}

#[test]
fn moyenne_geometrique_valeur() {
    // racine cinquième de 4*9*3*7*6 = 4536
    let e = Expr::moyenne_geometrique(&[4.0, 9.0, 3.0, 7.0, 6.0]);
    let attendu = 4536f64.powf(1.0 / 5.0);
    assert_proche(e.evaluer(&Valeurs::new()).unwrap(), attendu);
}
