// src/noyau/operateur.rs

use super::erreur::ErreurSaisie;

/// Les quatre opérations du pavé.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    /// Symbole affiché (pavé + expression en cours).
    pub const fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "−",
            Operateur::Fois => "×",
            Operateur::Divise => "÷",
        }
    }

    /// apply(a, b, op).
    ///
    /// Division par zéro : résultat 0 (pas d’erreur, pas d’Infinity).
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Operateur::Plus => a + b,
            Operateur::Moins => a - b,
            Operateur::Fois => a * b,
            Operateur::Divise => {
                if b != 0.0 {
                    a / b
                } else {
                    0.0
                }
            }
        }
    }
}

impl TryFrom<char> for Operateur {
    type Error = ErreurSaisie;

    /// Accepte l’ASCII du clavier et les symboles typographiques du pavé.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operateur::Plus),
            '-' | '−' => Ok(Operateur::Moins),
            '*' | '×' => Ok(Operateur::Fois),
            '/' | '÷' => Ok(Operateur::Divise),
            autre => Err(ErreurSaisie::OperateurInconnu(autre)),
        }
    }
}
