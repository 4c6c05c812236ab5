// src/app/clavier.rs
//
// Clavier physique -> actions du noyau (table fixe, indépendante du réducteur).
//
// - Caractères (Event::Text) : 0-9, + - * /, =, . et ,
// - Touches nommées (Event::Key) : Enter, Escape, Delete, Backspace
//
// Un événement reconnu est CONSOMMÉ (retiré de la file egui) : aucun autre widget ne le voit.
// Un événement inconnu reste dans la file et ne déclenche rien.

use eframe::egui;

use crate::noyau::Action;

/// Touches nommées (pas de texte associé).
fn action_pour_touche(key: egui::Key) -> Option<Action> {
    match key {
        egui::Key::Enter => Some(Action::Calculer),
        egui::Key::Escape | egui::Key::Delete => Some(Action::Effacer),
        egui::Key::Backspace => Some(Action::RetourArriere),
        _ => None,
    }
}

/// Texte tapé : un seul caractère attendu ("5", "+", ",").
fn action_pour_texte(texte: &str) -> Option<Action> {
    let mut chars = texte.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    match Action::try_from(c) {
        Ok(a) => Some(a),
        Err(e) => {
            tracing::trace!(%e, "touche ignorée");
            None
        }
    }
}

/// Un événement egui -> action éventuelle.
pub fn action_pour_evenement(ev: &egui::Event) -> Option<Action> {
    match ev {
        egui::Event::Text(t) => action_pour_texte(t),
        egui::Event::Key {
            key, pressed: true, ..
        } => action_pour_touche(*key),
        _ => None,
    }
}

/// Retire de la file les événements reconnus et renvoie leurs actions, dans l’ordre.
pub fn extraire_actions(evenements: &mut Vec<egui::Event>) -> Vec<Action> {
    let mut actions = Vec::new();
    evenements.retain(|ev| match action_pour_evenement(ev) {
        Some(a) => {
            actions.push(a);
            false
        }
        None => true,
    });
    actions
}

/// Version “contexte” : à appeler une fois par frame, avant la vue.
pub fn consommer_clavier(ctx: &egui::Context) -> Vec<Action> {
    ctx.input_mut(|i| extraire_actions(&mut i.events))
}
