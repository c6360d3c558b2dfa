// src/noyau/jetons.rs

use super::erreurs::ErreurExpr;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Variables : toute suite contiguë de lettres (pas de fonctions ici).
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - littéraux flottants (ex: 12, 3.5) — le point exige un chiffre derrière
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - identifiants : suites de lettres ASCII (ex: x, rayon)
///
/// Tout autre caractère (hors blancs) est une erreur d'analyse.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurExpr> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Tok::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Tok::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Tok::Caret);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants : suites de lettres ASCII
        if c.is_ascii_alphabetic() {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let nom: String = chars[start..i].iter().collect();
            out.push(Tok::Ident(nom));
            continue;
        }

        // Littéral flottant : chiffres, puis éventuellement '.' + chiffres.
        // Un '.' sans chiffre derrière est laissé en place (erreur au tour
        // suivant) : "4." n'est pas un nombre.
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }

            if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }

            let texte: String = chars[start..i].iter().collect();
            let valeur: f64 = texte
                .parse()
                .map_err(|_| ErreurExpr::Analyse(format!("nombre invalide : {texte}")))?;

            out.push(Tok::Num(valeur));
            continue;
        }

        return Err(ErreurExpr::Analyse(format!("caractère inattendu : '{c}'")));
    }

    Ok(out)
}
