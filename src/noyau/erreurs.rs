// src/noyau/erreurs.rs

use thiserror::Error;

/// Erreurs du noyau (analyse + évaluation).
///
/// Détection différée : un symbole d'opérateur invalide ne déclenche rien
/// à la construction de l'arbre, seulement à l'évaluation. Pareil pour une
/// variable sans valeur. L'analyse, elle, échoue immédiatement mais sans
/// diagnostic précis (contrat "échoue visiblement").
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurExpr {
    #[error("variable sans valeur assignée : {0}")]
    VariableLibre(String),

    #[error("opérateur invalide : {0}")]
    OperateurInconnu(String),

    #[error("expression mal formée : {0}")]
    Analyse(String),
}
