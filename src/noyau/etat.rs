// src/noyau/etat.rs

use super::nombre::texte_nombre;
use super::operateur::Operateur;

/// Affichage de départ (entrée vide).
pub const AFFICHAGE_INITIAL: &str = "0";

/// Opérande gauche + opérateur en attente du second opérande.
///
/// Les deux vont ensemble : pas d’opérateur sans valeur précédente, et inversement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationEnAttente {
    pub gauche: f64,
    pub operateur: Operateur,
}

/// État complet de la calculatrice.
///
/// Jamais modifié en place hors du réducteur : chaque action produit un nouvel état.
#[derive(Debug, Clone, PartialEq)]
pub struct EtatCalc {
    /// Saisie courante (ou dernier résultat). Jamais vide, au plus un ".".
    pub affichage: String,
    pub en_attente: Option<OperationEnAttente>,
    /// Vrai juste après un opérateur ou un "=" : le prochain chiffre démarre un nouvel opérande.
    pub attente_nouvelle_valeur: bool,
}

impl Default for EtatCalc {
    fn default() -> Self {
        Self {
            affichage: AFFICHAGE_INITIAL.to_string(),
            en_attente: None,
            attente_nouvelle_valeur: false,
        }
    }
}

impl EtatCalc {
    pub fn valeur_precedente(&self) -> Option<f64> {
        self.en_attente.map(|p| p.gauche)
    }

    pub fn operateur(&self) -> Option<Operateur> {
        self.en_attente.map(|p| p.operateur)
    }

    /// Ligne d’expression affichée à l’écran :
    /// - "5 + 3" pendant la saisie du second opérande
    /// - "5 + " juste après l’opérateur
    /// - sinon l’affichage brut
    pub fn texte_expression(&self) -> String {
        match self.en_attente {
            Some(p) if self.attente_nouvelle_valeur => {
                format!("{} {} ", texte_nombre(p.gauche), p.operateur.symbole())
            }
            Some(p) => format!(
                "{} {} {}",
                texte_nombre(p.gauche),
                p.operateur.symbole(),
                self.affichage
            ),
            None => self.affichage.clone(),
        }
    }
}
