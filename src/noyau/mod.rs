//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - operateur.rs : + − × ÷ (et division par zéro => 0)
//! - action.rs    : chiffres validés + les six actions
//! - etat.rs      : EtatCalc + ligne d’expression
//! - nombre.rs    : texte <-> f64 pour l’affichage
//! - reducteur.rs : (état, action) -> état
//! - erreur.rs    : symboles refusés

pub mod action;
pub mod erreur;
pub mod etat;
pub mod nombre;
pub mod operateur;
pub mod reducteur;

// API publique minimale
pub use action::{Action, Chiffre};
pub use etat::EtatCalc;
pub use operateur::Operateur;
pub use reducteur::reduire;
