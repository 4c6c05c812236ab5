//! src/app/etat.rs
//!
//! État UI : l’état du noyau + les réglages d’affichage.
//!
//! Contrats :
//! - Aucune arithmétique ici : tout passe par `noyau::reduire`.
//! - L’état du noyau est remplacé en entier à chaque action (jamais modifié en place).
//! - Le séparateur décimal ne touche que l’affichage, jamais le noyau.

use crate::noyau::{reduire, Action, EtatCalc};

/// Séparateur décimal par défaut (libellé de la touche + affichage).
pub const SEPARATEUR_DEFAUT: char = ',';

/// Séparateurs proposés dans l’UI.
pub const SEPARATEURS: [char; 2] = [',', '.'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub separateur_decimal: char,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            separateur_decimal: SEPARATEUR_DEFAUT,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    // --- noyau (lecture seule entre deux actions) ---
    calc: EtatCalc,

    // --- paramètres ---
    pub reglages: Reglages,
}

impl AppCalc {
    /// Seule porte d’entrée vers le noyau.
    pub fn dispatch(&mut self, action: Action) {
        let suivant = reduire(&self.calc, action);
        tracing::debug!(
            ?action,
            avant = %self.calc.affichage,
            apres = %suivant.affichage,
            gauche = ?suivant.valeur_precedente(),
            operateur = ?suivant.operateur(),
            attente = suivant.attente_nouvelle_valeur,
            "action appliquée"
        );
        self.calc = suivant;
    }

    /// Texte de l’écran, séparateur décimal substitué.
    pub fn texte_affichage(&self) -> String {
        localiser(&self.calc.texte_expression(), self.reglages.separateur_decimal)
    }

    pub fn set_separateur(&mut self, sep: char) {
        if SEPARATEURS.contains(&sep) {
            self.reglages.separateur_decimal = sep;
        } else {
            tracing::warn!(?sep, "séparateur refusé");
        }
    }
}

/// Remplace le point décimal du noyau par le séparateur choisi.
pub fn localiser(texte: &str, sep: char) -> String {
    if sep == '.' {
        return texte.to_string();
    }
    texte.replace('.', &sep.to_string())
}
