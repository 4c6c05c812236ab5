//! Noyau — réducteur
//!
//! (état, action) -> nouvel état. Pur, total, sans effet de bord.
//! Un seul opérateur en attente : pas de priorité, évaluation en chaîne.

use super::action::Action;
use super::etat::{EtatCalc, OperationEnAttente};
use super::nombre::{texte_nombre, valeur_numerique};

/// Applique une action et renvoie l’état suivant (jamais d’erreur).
pub fn reduire(etat: &EtatCalc, action: Action) -> EtatCalc {
    match action {
        Action::SaisirChiffre(d) => {
            let d = d.as_char();
            if etat.attente_nouvelle_valeur {
                return EtatCalc {
                    affichage: d.to_string(),
                    attente_nouvelle_valeur: false,
                    ..etat.clone()
                };
            }
            // "0" de tête supprimé : 0 puis 5 => "5"
            let affichage = if etat.affichage == "0" {
                d.to_string()
            } else {
                let mut s = etat.affichage.clone();
                s.push(d);
                s
            };
            EtatCalc {
                affichage,
                ..etat.clone()
            }
        }

        Action::SaisirDecimale => {
            if etat.attente_nouvelle_valeur {
                return EtatCalc {
                    affichage: "0.".to_string(),
                    attente_nouvelle_valeur: false,
                    ..etat.clone()
                };
            }
            if etat.affichage.contains('.') {
                return etat.clone();
            }
            EtatCalc {
                affichage: format!("{}.", etat.affichage),
                ..etat.clone()
            }
        }

        Action::SaisirOperateur(op) => {
            let courant = valeur_numerique(&etat.affichage);

            match etat.en_attente {
                None => EtatCalc {
                    en_attente: Some(OperationEnAttente {
                        gauche: courant,
                        operateur: op,
                    }),
                    attente_nouvelle_valeur: true,
                    ..etat.clone()
                },

                // Changement d’avis : on remplace l’opérateur, l’opérande reste
                Some(p) if etat.attente_nouvelle_valeur => EtatCalc {
                    en_attente: Some(OperationEnAttente {
                        operateur: op,
                        ..p
                    }),
                    ..etat.clone()
                },

                // Évaluation en chaîne : 5 + 3 * => 8 *
                Some(p) => {
                    let resultat = p.operateur.appliquer(p.gauche, courant);
                    EtatCalc {
                        affichage: texte_nombre(resultat),
                        en_attente: Some(OperationEnAttente {
                            gauche: resultat,
                            operateur: op,
                        }),
                        attente_nouvelle_valeur: true,
                    }
                }
            }
        }

        Action::Calculer => match etat.en_attente {
            Some(p) => {
                let resultat = p.operateur.appliquer(p.gauche, valeur_numerique(&etat.affichage));
                EtatCalc {
                    affichage: texte_nombre(resultat),
                    en_attente: None,
                    attente_nouvelle_valeur: true,
                }
            }
            None => etat.clone(),
        },

        Action::Effacer => EtatCalc::default(),

        Action::RetourArriere => {
            // Protège le résultat / l’opérande tout juste validé
            if etat.attente_nouvelle_valeur {
                return etat.clone();
            }
            let mut affichage = etat.affichage.clone();
            if affichage.chars().count() > 1 {
                affichage.pop();
            } else {
                affichage = "0".to_string();
            }
            EtatCalc {
                affichage,
                ..etat.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::reduire;
    use crate::noyau::action::{Action, Chiffre};
    use crate::noyau::etat::EtatCalc;
    use crate::noyau::operateur::Operateur;

    fn chiffre(d: u8) -> Action {
        Action::SaisirChiffre(Chiffre::new(d).unwrap())
    }

    fn op(c: char) -> Action {
        Action::SaisirOperateur(Operateur::try_from(c).unwrap())
    }

    fn applique_depuis(depart: EtatCalc, actions: &[Action]) -> EtatCalc {
        actions.iter().fold(depart, |e, a| reduire(&e, *a))
    }

    fn applique(actions: &[Action]) -> EtatCalc {
        applique_depuis(EtatCalc::default(), actions)
    }

    // --- Saisie ---

    #[test]
    fn zero_de_tete_supprime() {
        let e = applique(&[chiffre(0), chiffre(5)]);
        assert_eq!(e.affichage, "5");
    }

    #[test]
    fn chiffres_concatenes() {
        let e = applique(&[chiffre(1), chiffre(2), chiffre(0)]);
        assert_eq!(e.affichage, "120");
    }

    #[test]
    fn decimale_idempotente() {
        let une = applique(&[chiffre(3), Action::SaisirDecimale]);
        let deux = reduire(&une, Action::SaisirDecimale);
        assert_eq!(une.affichage, "3.");
        assert_eq!(deux, une);
        assert_eq!(deux.affichage.matches('.').count(), 1);
    }

    #[test]
    fn decimale_sur_zero_initial() {
        let e = applique(&[Action::SaisirDecimale, chiffre(5)]);
        assert_eq!(e.affichage, "0.5");
    }

    #[test]
    fn decimale_apres_operateur_demarre_zero_point() {
        let e = applique(&[chiffre(4), op('+'), Action::SaisirDecimale]);
        assert_eq!(e.affichage, "0.");
        assert!(!e.attente_nouvelle_valeur);
        assert_eq!(e.texte_expression(), "4 + 0.");
    }

    // --- Opérateurs ---

    #[test]
    fn premier_operateur_memorise_operande() {
        let e = applique(&[chiffre(9), op('+')]);
        assert_eq!(e.valeur_precedente(), Some(9.0));
        assert_eq!(e.operateur(), Some(Operateur::Plus));
        assert!(e.attente_nouvelle_valeur);
        assert_eq!(e.affichage, "9");
    }

    #[test]
    fn changement_operateur_sans_calcul() {
        let e = applique(&[chiffre(6), op('+'), op('-'), op('*')]);
        assert_eq!(e.valeur_precedente(), Some(6.0));
        assert_eq!(e.operateur(), Some(Operateur::Fois));
        assert_eq!(e.affichage, "6");
    }

    #[test]
    fn evaluation_en_chaine() {
        // (5 + 3) × 2
        let e = applique(&[
            chiffre(5),
            op('+'),
            chiffre(3),
            op('*'),
            chiffre(2),
            Action::Calculer,
        ]);
        assert_eq!(e.affichage, "16");
        assert_eq!(e.en_attente, None);
        assert!(e.attente_nouvelle_valeur);
    }

    #[test]
    fn chaine_affiche_resultat_intermediaire() {
        let e = applique(&[chiffre(5), op('+'), chiffre(3), op('*')]);
        assert_eq!(e.affichage, "8");
        assert_eq!(e.valeur_precedente(), Some(8.0));
        assert_eq!(e.texte_expression(), "8 × ");
    }

    #[test]
    fn pas_de_priorite() {
        // 2 + 3 × 4 = 20 (gauche à droite)
        let e = applique(&[
            chiffre(2),
            op('+'),
            chiffre(3),
            op('*'),
            chiffre(4),
            Action::Calculer,
        ]);
        assert_eq!(e.affichage, "20");
    }

    // --- Calcul ---

    #[test]
    fn division_par_zero() {
        let e = applique(&[chiffre(7), op('/'), chiffre(0), Action::Calculer]);
        assert_eq!(e.affichage, "0");
    }

    #[test]
    fn division_decimale() {
        let e = applique(&[chiffre(1), op('/'), chiffre(4), Action::Calculer]);
        assert_eq!(e.affichage, "0.25");
    }

    #[test]
    fn soustraction_negative() {
        let e = applique(&[chiffre(3), op('-'), chiffre(8), Action::Calculer]);
        assert_eq!(e.affichage, "-5");
    }

    #[test]
    fn calculer_sans_operateur_ne_fait_rien() {
        let avant = applique(&[chiffre(4), chiffre(2)]);
        let apres = reduire(&avant, Action::Calculer);
        assert_eq!(apres, avant);
    }

    #[test]
    fn calculer_juste_apres_operateur_reprend_l_affichage() {
        // 5 + = => 5 + 5
        let e = applique(&[chiffre(5), op('+'), Action::Calculer]);
        assert_eq!(e.affichage, "10");
    }

    #[test]
    fn chiffre_apres_resultat_demarre_nouvel_operande() {
        let e = applique(&[chiffre(2), op('+'), chiffre(2), Action::Calculer, chiffre(7)]);
        assert_eq!(e.affichage, "7");
        assert_eq!(e.en_attente, None);
        assert!(!e.attente_nouvelle_valeur);
    }

    #[test]
    fn operateur_apres_resultat_reutilise_resultat() {
        let e = applique(&[
            chiffre(2),
            op('+'),
            chiffre(2),
            Action::Calculer,
            op('*'),
            chiffre(3),
            Action::Calculer,
        ]);
        assert_eq!(e.affichage, "12");
    }

    #[test]
    fn resultat_decimal_imprecis() {
        let e = applique(&[
            Action::SaisirDecimale,
            chiffre(1),
            op('+'),
            Action::SaisirDecimale,
            chiffre(2),
            Action::Calculer,
        ]);
        assert_eq!(e.affichage, "0.30000000000000004");
    }

    // --- Correction ---

    #[test]
    fn retour_arriere_protege_operande_valide() {
        let e = applique(&[chiffre(9), op('+'), Action::RetourArriere]);
        assert_eq!(e.affichage, "9");
        assert!(e.attente_nouvelle_valeur);
    }

    #[test]
    fn retour_arriere_protege_resultat() {
        let avant = applique(&[chiffre(1), chiffre(2), op('+'), chiffre(3), Action::Calculer]);
        let apres = reduire(&avant, Action::RetourArriere);
        assert_eq!(avant.affichage, "15");
        assert_eq!(apres, avant);
    }

    #[test]
    fn retour_arriere_jusqu_a_zero_puis_stable() {
        let mut e = applique(&[chiffre(1), chiffre(2), Action::SaisirDecimale, chiffre(5)]);
        assert_eq!(e.affichage, "12.5");

        for attendu in ["12.", "12", "1", "0", "0", "0"] {
            e = reduire(&e, Action::RetourArriere);
            assert_eq!(e.affichage, attendu);
        }
    }

    #[test]
    fn retour_arriere_retire_la_decimale() {
        let e = applique(&[chiffre(3), Action::SaisirDecimale, Action::RetourArriere, Action::SaisirDecimale]);
        assert_eq!(e.affichage, "3.");
    }

    // --- Remise à zéro ---

    #[test]
    fn effacer_revient_a_l_etat_initial() {
        let e = applique(&[chiffre(5), op('+'), chiffre(3), Action::Effacer]);
        assert_eq!(e, EtatCalc::default());
    }

    #[test]
    fn effacer_apres_resultat() {
        let e = applique(&[chiffre(8), op('/'), chiffre(2), Action::Calculer, Action::Effacer]);
        assert_eq!(e, EtatCalc::default());
    }
}
