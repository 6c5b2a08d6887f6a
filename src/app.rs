// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (global, sans champ texte à focaliser) :
// - caractères tapés => Touche::from_str ("7", "+", "x", ".", "%", "=", ...)
// - Enter = "=" ; Escape = AC

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let touches: Vec<Touche> = ctx.input(|i| i.events.iter().filter_map(touche_clavier).collect());
        for t in touches {
            self.appuyer(t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

fn touche_clavier(ev: &egui::Event) -> Option<Touche> {
    match ev {
        egui::Event::Text(t) => t.parse().ok(),
        egui::Event::Key {
            key, pressed: true, ..
        } => match key {
            egui::Key::Enter => Some(Touche::Egal),
            egui::Key::Escape => Some(Touche::Effacer),
            _ => None,
        },
        _ => None,
    }
}
