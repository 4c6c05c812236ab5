// src/noyau/nombre.rs
//
// Texte <-> nombre pour l’affichage de la calculatrice.
// - texte_nombre : forme décimale canonique la plus courte (aller-retour exact)
// - valeur_numerique : lecture de l’affichage (saisie ou résultat)

/// Au-delà (ou en deçà) : notation exponentielle.
const SEUIL_EXPOSANT_HAUT: f64 = 1e21;
const SEUIL_EXPOSANT_BAS: f64 = 1e-6;

/// Convertit un résultat en texte d’affichage.
///
/// - entier => pas de ".0" ("16")
/// - -0 => "0"
/// - 1e-6 <= |x| < 1e21 => notation simple
/// - sinon => exposant signé ("1e+21", "1.5e-7")
/// - non fini => "Infinity", "-Infinity", "NaN"
pub fn texte_nombre(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if x == 0.0 {
        return "0".to_string();
    }

    let abs = x.abs();
    if (SEUIL_EXPOSANT_BAS..SEUIL_EXPOSANT_HAUT).contains(&abs) {
        // Display de f64 : plus courte forme aller-retour, jamais d’exposant
        return format!("{x}");
    }

    // LowerExp donne "1e21" / "1.5e-7" : on force le signe de l’exposant
    let brut = format!("{x:e}");
    match brut.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => brut,
    }
}

/// Lit l’affichage comme nombre.
///
/// Couvre tout ce que `texte_nombre` produit et tout ce que l’utilisateur peut taper
/// ("5.", "0.", "12.5"). Texte illisible => NaN.
pub fn valeur_numerique(affichage: &str) -> f64 {
    affichage.trim().parse::<f64>().unwrap_or(f64::NAN)
}
