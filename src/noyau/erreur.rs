// src/noyau/erreur.rs

/// Symbole refusé avant de devenir une `Action`.
///
/// Le réducteur lui-même ne produit jamais d’erreur : tout ce qui est invalide
/// est arrêté ici, à la frontière (clavier, pavé).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErreurSaisie {
    #[error("chiffre invalide : {0:?}")]
    ChiffreInvalide(char),

    #[error("opérateur inconnu : {0:?}")]
    OperateurInconnu(char),

    #[error("symbole sans action : {0:?}")]
    SymboleInconnu(char),
}
