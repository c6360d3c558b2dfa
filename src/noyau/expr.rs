// src/noyau/expr.rs
//
// AST : arbre binaire d'expression arithmétique.
// - Nombre : littéral flottant (f64, sémantique IEEE — pas de garde sur /0)
// - Var    : variable symbolique (ex: x)
// - Op     : opérateur binaire avec ses DEUX enfants, toujours présents
//
// IMPORTANT (détection différée) :
// - Op garde son symbole en String ouverte, PAS en enum fermée.
//   Un symbole hors {+,-,*,/,^} ne gêne ni la construction ni le rendu ;
//   il n'échoue qu'à l'évaluation (OperateurInconnu).
// - Idem pour les variables : une Var sans valeur n'échoue qu'à
//   l'évaluation (VariableLibre), jamais avant.

use std::collections::{HashMap, HashSet};
use std::fmt;

use super::erreurs::ErreurExpr;

/// Affectations de variables fournies à l'évaluation (nom -> valeur).
pub type Valeurs = HashMap<String, f64>;

/// Un noeud de l'arbre d'expression.
///
/// Clone = copie profonde indépendante (les enfants sont possédés via Box,
/// jamais partagés). L'égalité est structurelle.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),
    Var(String),
    Op(Box<Expr>, String, Box<Expr>),
}

impl Expr {
    /// Construit un littéral numérique.
    pub fn nombre(valeur: f64) -> Expr {
        Expr::Nombre(valeur)
    }

    /// Construit une variable.
    pub fn var(nom: &str) -> Expr {
        Expr::Var(nom.to_string())
    }

    /// Construit un noeud opérateur. Aucune validation du symbole ici
    /// (voir en-tête du fichier).
    pub fn op(gauche: Expr, symbole: &str, droite: Expr) -> Expr {
        Expr::Op(Box::new(gauche), symbole.to_string(), Box::new(droite))
    }

    pub fn est_nombre(&self) -> bool {
        matches!(self, Expr::Nombre(_))
    }

    pub fn est_var(&self) -> bool {
        matches!(self, Expr::Var(_))
    }

    pub fn est_operateur(&self) -> bool {
        matches!(self, Expr::Op(_, _, _))
    }

    /* ------------------------ Rendu postfixe ------------------------ */

    /// Rendu postfixe (RPN) : `gauche droite symbole`, séparés d'espaces.
    /// Les feuilles s'affichent comme en infixe.
    pub fn postfixe(&self) -> String {
        use Expr::*;

        match self {
            Nombre(v) => format!("{v}"),
            Var(nom) => nom.clone(),
            Op(g, s, d) => format!("{} {} {}", g.postfixe(), d.postfixe(), s),
        }
    }

    /// Rendu infixe à parenthèses minimales.
    /// TODO: omettre les parenthèses redondantes selon la précédence ;
    /// en attendant on retombe sur le rendu entièrement parenthésé.
    pub fn infixe_minimal(&self) -> String {
        self.to_string()
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Évalue l'arbre contre les affectations fournies.
    ///
    /// - Var absente des affectations => VariableLibre (jamais 0 par défaut).
    /// - Symbole hors {+,-,*,/,^}     => OperateurInconnu.
    /// - Division par zéro : sémantique f64 native (inf / NaN), PAS une
    ///   erreur — on ne rajoute aucune garde.
    pub fn evaluer(&self, valeurs: &Valeurs) -> Result<f64, ErreurExpr> {
        use Expr::*;

        match self {
            Nombre(v) => Ok(*v),

            Var(nom) => valeurs
                .get(nom)
                .copied()
                .ok_or_else(|| ErreurExpr::VariableLibre(nom.clone())),

            Op(g, s, d) => {
                // Les deux enfants d'abord, le symbole ensuite : une erreur
                // d'enfant gagne sur un symbole invalide.
                let vg = g.evaluer(valeurs)?;
                let vd = d.evaluer(valeurs)?;

                match s.as_str() {
                    "+" => Ok(vg + vd),
                    "-" => Ok(vg - vd),
                    "*" => Ok(vg * vd),
                    "/" => Ok(vg / vd),
                    "^" => Ok(vg.powf(vd)),
                    autre => Err(ErreurExpr::OperateurInconnu(autre.to_string())),
                }
            }
        }
    }

    /* ------------------------ Inverse (1/e) ------------------------ */

    /// Construit l'inverse algébrique de l'expression.
    ///
    /// - Nombre n      => Nombre(1/n)
    /// - a / b         => b / a (échange des enfants, clones profonds)
    /// - tout le reste => 1 / clone(e)
    pub fn inverse(&self) -> Expr {
        use Expr::*;

        match self {
            Nombre(v) => Nombre(1.0 / v),
            Op(g, s, d) if s == "/" => Op(d.clone(), s.clone(), g.clone()),
            _ => Expr::op(Nombre(1.0), "/", self.clone()),
        }
    }

    /* ------------------------ Variables ------------------------ */

    /// Ensemble des noms de variables présents dans l'arbre (sans doublon).
    pub fn variables(&self) -> HashSet<String> {
        let mut noms = HashSet::new();
        self.collecte_variables(&mut noms);
        noms
    }

    fn collecte_variables(&self, noms: &mut HashSet<String>) {
        use Expr::*;

        match self {
            Nombre(_) => {}
            Var(nom) => {
                noms.insert(nom.clone());
            }
            Op(g, _, d) => {
                g.collecte_variables(noms);
                d.collecte_variables(noms);
            }
        }
    }

    /* ------------------------ Moyenne géométrique ------------------------ */

    /// Construit l'expression `(n1 * n2 * ... * nk) ^ (1/k)` SANS l'évaluer.
    ///
    /// - liste vide => Nombre(0)
    /// - le produit est strictement associé à gauche (pli gauche), pour un
    ///   rendu et une évaluation stables
    /// - l'exposant est `Nombre(k).inverse()`, donc déjà réduit en 1/k
    ///   (cas singleton : x ^ (1/1))
    pub fn moyenne_geometrique(nombres: &[f64]) -> Expr {
        match nombres {
            [] => Expr::Nombre(0.0),
            [premier, reste @ ..] => {
                let produit = reste.iter().fold(Expr::Nombre(*premier), |acc, v| {
                    Expr::op(acc, "*", Expr::Nombre(*v))
                });
                Expr::op(produit, "^", Expr::Nombre(nombres.len() as f64).inverse())
            }
        }
    }
}

/* ------------------------ Rendu infixe (Display) ------------------------ */

/// Rendu infixe ENTIÈREMENT parenthésé : chaque Op s'écrit
/// `(gauche symbole droite)`, sans omission selon la précédence.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;

        match self {
            Nombre(v) => write!(f, "{v}"),
            Var(nom) => write!(f, "{nom}"),
            Op(g, s, d) => write!(f, "({g} {s} {d})"),
        }
    }
}
