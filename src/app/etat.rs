//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter le moteur et la base sélectionnée, et relayer les pressions.
//!
//! Contrats :
//! - Aucune logique de calcul ici (tout passe par le noyau).
//! - Une pression à la fois, dans l’ordre d’arrivée (clic ou clavier).

use crate::config::Config;
use crate::noyau::{BaseNumerique, Moteur, Touche};

#[derive(Clone, Debug)]
pub struct AppCalc {
    moteur: Moteur,

    // --- UX ---
    // Base affichée par le sélecteur (copie, resynchronisée après chaque changement).
    pub base: BaseNumerique,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppCalc {
    pub fn new(config: &Config) -> Self {
        Self {
            moteur: Moteur::new(config.base),
            base: config.base,
        }
    }

    /* ------------------------ Actions ------------------------ */

    pub fn appuyer(&mut self, touche: Touche) {
        self.moteur.appuyer(touche);
    }

    pub fn changer_base(&mut self, base: BaseNumerique) {
        self.moteur.changer_base(base);
        self.base = self.moteur.base();
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn moteur(&self) -> &Moteur {
        &self.moteur
    }

    pub fn affichage(&self) -> &str {
        self.moteur.affichage()
    }

    pub fn trace(&self) -> String {
        self.moteur.trace()
    }
}
