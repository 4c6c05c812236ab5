// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : ligne d’expression, alignée à droite, grande police monospace
// - Pavé : 4 colonnes, couleur par famille de touche, "0" double largeur
// - Réglage : séparateur décimal (virgule / point)
//
// Le clavier physique est traité dans app.rs (avant la vue), pas ici.

use eframe::egui;

use super::etat::{AppCalc, SEPARATEURS};
use crate::noyau::{Action, Chiffre, Operateur};

/// Hauteur d’une touche (px).
const HAUTEUR_TOUCHE: f32 = 52.0;

/// Taille du texte de l’écran.
const TAILLE_ECRAN: f32 = 34.0;

/// Famille de touche : fixe la couleur de fond.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variante {
    Chiffre,
    Operateur,
    Egal,
    Effacer,
    Correction,
}

impl Variante {
    fn fond(self, visuals: &egui::Visuals) -> egui::Color32 {
        match self {
            Variante::Chiffre => visuals.widgets.inactive.weak_bg_fill,
            Variante::Operateur => egui::Color32::from_rgb(255, 149, 0),
            Variante::Egal => egui::Color32::from_rgb(52, 168, 83),
            Variante::Effacer => egui::Color32::from_rgb(220, 53, 69),
            Variante::Correction => egui::Color32::from_rgb(108, 117, 125),
        }
    }

    fn texte(self, visuals: &egui::Visuals) -> egui::Color32 {
        match self {
            Variante::Chiffre => visuals.text_color(),
            _ => egui::Color32::WHITE,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Touche {
    pub libelle: String,
    pub action: Action,
    pub variante: Variante,
    /// Occupe deux colonnes.
    pub large: bool,
}

impl Touche {
    fn new(libelle: impl Into<String>, action: Action, variante: Variante) -> Self {
        Self {
            libelle: libelle.into(),
            action,
            variante,
            large: false,
        }
    }

    fn chiffre(d: u8) -> Option<Self> {
        let c = Chiffre::new(d)?;
        Some(Self::new(
            c.as_char().to_string(),
            Action::SaisirChiffre(c),
            Variante::Chiffre,
        ))
    }

    fn operateur(op: Operateur) -> Self {
        Self::new(op.symbole(), Action::SaisirOperateur(op), Variante::Operateur)
    }

    fn large(mut self) -> Self {
        self.large = true;
        self
    }
}

/// Disposition du pavé, ligne par ligne.
///
/// ```text
/// C  ÷  ×  −
/// 7  8  9  +
/// 4  5  6  DEL
/// 1  2  3  =
/// 0 (large) ,
/// ```
pub fn pave(separateur: char) -> Vec<Vec<Touche>> {
    let chiffres = |ds: [u8; 3]| -> Vec<Touche> { ds.into_iter().filter_map(Touche::chiffre).collect() };

    let mut l2 = chiffres([7, 8, 9]);
    l2.push(Touche::operateur(Operateur::Plus));

    let mut l3 = chiffres([4, 5, 6]);
    l3.push(Touche::new("DEL", Action::RetourArriere, Variante::Correction));

    let mut l4 = chiffres([1, 2, 3]);
    l4.push(Touche::new("=", Action::Calculer, Variante::Egal));

    let mut l5: Vec<Touche> = Touche::chiffre(0).map(Touche::large).into_iter().collect();
    l5.push(Touche::new(
        separateur.to_string(),
        Action::SaisirDecimale,
        Variante::Chiffre,
    ));

    vec![
        vec![
            Touche::new("C", Action::Effacer, Variante::Effacer),
            Touche::operateur(Operateur::Divise),
            Touche::operateur(Operateur::Fois),
            Touche::operateur(Operateur::Moins),
        ],
        l2,
        l3,
        l4,
        l5,
    ]
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(10.0);

        if let Some(action) = self.ui_pave(ui) {
            self.dispatch(action);
        }

        ui.add_space(8.0);
        ui.separator();

        self.ui_reglages(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let texte = self.texte_affichage();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(texte).monospace().size(TAILLE_ECRAN));
                });
            });
    }

    /// Dessine le pavé ; renvoie l’action de la touche cliquée (au plus une par frame).
    fn ui_pave(&self, ui: &mut egui::Ui) -> Option<Action> {
        let esp = ui.spacing().item_spacing.x;
        let colonne = ((ui.available_width() - 3.0 * esp) / 4.0).max(40.0);

        let mut clic = None;
        for ligne in pave(self.reglages.separateur_decimal) {
            ui.horizontal(|ui| {
                for touche in &ligne {
                    let largeur = if touche.large {
                        2.0 * colonne + esp
                    } else {
                        colonne
                    };
                    if Self::bouton(ui, touche, [largeur, HAUTEUR_TOUCHE]).clicked() {
                        clic = Some(touche.action);
                    }
                }
            });
        }
        clic
    }

    fn bouton(ui: &mut egui::Ui, touche: &Touche, taille: [f32; 2]) -> egui::Response {
        let visuals = ui.visuals();
        let texte = egui::RichText::new(&touche.libelle)
            .size(22.0)
            .color(touche.variante.texte(visuals));
        let bouton = egui::Button::new(texte).fill(touche.variante.fond(visuals));
        ui.add_sized(taille, bouton)
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Séparateur décimal :");
            let mut sep = self.reglages.separateur_decimal;
            for s in SEPARATEURS {
                let nom = if s == ',' { "virgule" } else { "point" };
                ui.radio_value(&mut sep, s, nom);
            }
            if sep != self.reglages.separateur_decimal {
                self.set_separateur(sep);
            }
        });
    }
}
