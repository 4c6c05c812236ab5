// src/noyau/action.rs

use super::erreur::ErreurSaisie;
use super::operateur::Operateur;

/// Chiffre validé (0..=9).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chiffre(u8);

impl Chiffre {
    pub fn new(d: u8) -> Option<Self> {
        (d <= 9).then_some(Chiffre(d))
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Chiffre {
    type Error = ErreurSaisie;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Chiffre(d as u8))
            .ok_or(ErreurSaisie::ChiffreInvalide(c))
    }
}

/// Les six actions acceptées par le réducteur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SaisirChiffre(Chiffre),
    SaisirDecimale,
    SaisirOperateur(Operateur),
    Calculer,
    Effacer,
    RetourArriere,
}

impl TryFrom<char> for Action {
    type Error = ErreurSaisie;

    /// Symbole tapé -> action. Les touches nommées (Enter, Escape…) sont gérées côté app.
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0'..='9' => Chiffre::try_from(c).map(Action::SaisirChiffre),
            '.' | ',' => Ok(Action::SaisirDecimale),
            '=' => Ok(Action::Calculer),
            _ => Operateur::try_from(c)
                .map(Action::SaisirOperateur)
                .map_err(|_| ErreurSaisie::SymboleInconnu(c)),
        }
    }
}
