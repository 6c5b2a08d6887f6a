// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Sélecteur DEC / BIN / HEX, ligne d’expression au-dessus de l’entrée courante
// - Pavé différent par base (BIN : 0/1 + opérateurs ; HEX : 0–F + opérateurs)
// - Démarche repliable : pile confirmée + RPN du dernier "="

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{BaseNumerique, Touche};

const PAVE_DEC: &[&[Touche]] = &[
    &[Touche::Pi, Touche::E, Touche::Sinus, Touche::Cosinus],
    &[Touche::Effacer, Touche::Oppose, Touche::Pourcent, Touche::Divise],
    &[Touche::Chiffre('7'), Touche::Chiffre('8'), Touche::Chiffre('9'), Touche::Fois],
    &[Touche::Chiffre('4'), Touche::Chiffre('5'), Touche::Chiffre('6'), Touche::Moins],
    &[Touche::Chiffre('1'), Touche::Chiffre('2'), Touche::Chiffre('3'), Touche::Plus],
    &[Touche::Chiffre('0'), Touche::Point, Touche::Egal],
];

const PAVE_BIN: &[&[Touche]] = &[
    &[Touche::Plus, Touche::Moins, Touche::Fois, Touche::Divise],
    &[Touche::Chiffre('0'), Touche::Chiffre('1'), Touche::Egal, Touche::Effacer],
];

const PAVE_HEX: &[&[Touche]] = &[
    &[Touche::Effacer, Touche::Egal],
    &[Touche::Plus, Touche::Moins, Touche::Fois, Touche::Divise],
    &[Touche::Chiffre('7'), Touche::Chiffre('8'), Touche::Chiffre('9'), Touche::Chiffre('F')],
    &[Touche::Chiffre('4'), Touche::Chiffre('5'), Touche::Chiffre('6'), Touche::Chiffre('E')],
    &[Touche::Chiffre('1'), Touche::Chiffre('2'), Touche::Chiffre('3'), Touche::Chiffre('D')],
    &[Touche::Chiffre('0'), Touche::Chiffre('A'), Touche::Chiffre('B'), Touche::Chiffre('C')],
];

fn pave(base: BaseNumerique) -> &'static [&'static [Touche]] {
    match base {
        BaseNumerique::Decimale => PAVE_DEC,
        BaseNumerique::Binaire => PAVE_BIN,
        BaseNumerique::Hexadecimale => PAVE_HEX,
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading(crate::TITRE_APP);
                ui.add_space(6.0);

                self.ui_base(ui);

                ui.add_space(8.0);
                self.ui_ecran(ui);

                ui.add_space(8.0);
                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_base(&mut self, ui: &mut egui::Ui) {
        let mut choix = self.base;
        ui.horizontal(|ui| {
            for b in BaseNumerique::TOUTES {
                ui.selectable_value(&mut choix, b, b.nom());
            }
        });
        if choix != self.base {
            self.changer_base(choix);
        }
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let trace = self.trace();
        let affichage = self.affichage().to_string();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // ligne d’expression (peut être vide)
                    ui.label(egui::RichText::new(trace).monospace().size(18.0));
                    ui.label(egui::RichText::new(affichage).monospace().size(40.0).strong());
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let mut clic: Option<Touche> = None;

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in pave(self.base) {
                    for &t in ligne.iter() {
                        let resp = ui.add_sized([64.0, 48.0], egui::Button::new(t.symbole()));
                        if resp.clicked() {
                            clic = Some(t);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(t) = clic {
            self.appuyer(t);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                let pile = self.moteur().pile();
                if !pile.is_empty() {
                    Self::champ_demarche(ui, "En attente", "demarche_pile", &pile.join(" "));
                }
                match self.moteur().derniere_evaluation() {
                    Some(e) => {
                        Self::champ_demarche(ui, "Jetons", "demarche_jetons", &e.jetons);
                        Self::champ_demarche(ui, "RPN", "demarche_rpn", &e.rpn);
                    }
                    None => {
                        ui.monospace("aucun calcul");
                    }
                }
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}
