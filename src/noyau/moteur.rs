//! Moteur : une pression de touche = une transition d’état atomique.
//!
//! touche -> registre (valeur / affichage / pile) -> trace -> deux textes à afficher
//!
//! Les deux composants partagent l’événement, pas leur état.

use super::base::BaseNumerique;
use super::eval::Evaluation;
use super::registre::Registre;
use super::touches::Touche;
use super::trace::Trace;
use super::trig;

#[derive(Clone, Debug, Default)]
pub struct Moteur {
    registre: Registre,
    trace: Trace,
    /// Vrai juste après "=" : la prochaine touche ouvre un nouveau cycle.
    egal_effectue: bool,
}

impl Moteur {
    pub fn new(base: BaseNumerique) -> Self {
        Self {
            registre: Registre::new(base),
            trace: Trace::new(),
            egal_effectue: false,
        }
    }

    /// Seul point d’entrée qui modifie l’état.
    pub fn appuyer(&mut self, touche: Touche) {
        let base = self.registre.base();
        if !base.accepte(touche) {
            tracing::debug!(touche = %touche, base = %base, "touche indisponible dans cette base");
            return;
        }

        // après "=", toute touche repart d’un état vierge avant d’être traitée
        if self.egal_effectue {
            self.effacer();
        }

        match touche {
            Touche::Chiffre(c) => self.registre.saisir(c),
            Touche::Point => self.registre.saisir('.'),
            Touche::Pi => self.registre.constante(trig::PI),
            Touche::E => self.registre.constante(trig::E),
            Touche::Egal => {
                self.registre.egal();
                self.egal_effectue = true;
            }
            Touche::Effacer => self.effacer(),
            _ => {
                if let Some(op) = touche.operateur() {
                    self.registre.operateur(op);
                } else if let Some(u) = touche.unaire() {
                    self.registre.unaire(u);
                }
            }
        }

        self.trace.appuyer(touche);

        tracing::debug!(
            touche = %touche,
            affichage = %self.registre.affichage(),
            trace = %self.trace.texte(),
            "pression"
        );
    }

    fn effacer(&mut self) {
        self.registre.effacer();
        self.trace.effacer();
        self.egal_effectue = false;
    }

    pub fn affichage(&self) -> &str {
        self.registre.affichage()
    }

    pub fn trace(&self) -> String {
        self.trace.texte()
    }

    pub fn base(&self) -> BaseNumerique {
        self.registre.base()
    }

    pub fn valeur(&self) -> f64 {
        self.registre.valeur()
    }

    /// Pile confirmée en attente du "=".
    pub fn pile(&self) -> &[String] {
        self.registre.pile()
    }

    pub fn derniere_evaluation(&self) -> Option<&Evaluation> {
        self.registre.derniere_evaluation()
    }

    /// Changement de mode : la valeur courante est re-rendue dans la nouvelle base.
    pub fn changer_base(&mut self, base: BaseNumerique) {
        if base == self.registre.base() {
            return;
        }
        self.registre.changer_base(base);
        tracing::debug!(base = %base, affichage = %self.registre.affichage(), "changement de base");
    }
}
