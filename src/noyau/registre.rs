// src/noyau/registre.rs
//
// Composant Entrée/Registre
// -------------------------
// - valeur : f64, seule source de vérité pour “le nombre courant”
// - affichage : texte de l’entrée (frappe en cours, ou rendu de la valeur)
// - pile : opérandes + opérateurs confirmés, consommée par "="
//
// Les opérateurs binaires sont différés (évalués au "="), les unaires et les
// constantes s’appliquent tout de suite et n’entrent jamais dans la pile.

use super::base::{lire, rendre, BaseNumerique};
use super::eval::{evaluer, Evaluation};
use super::operations::{Operateur, Unaire};

#[derive(Clone, Debug)]
pub struct Registre {
    base: BaseNumerique,
    valeur: f64,
    affichage: String,

    /// Vrai pendant la frappe d’un nouvel opérande (chiffres / un point).
    saisie_en_cours: bool,

    pile: Vec<String>,
    derniere_evaluation: Option<Evaluation>,
}

impl Default for Registre {
    fn default() -> Self {
        Self::new(BaseNumerique::default())
    }
}

impl Registre {
    pub fn new(base: BaseNumerique) -> Self {
        Self {
            base,
            valeur: 0.0,
            affichage: "0".to_string(),
            saisie_en_cours: false,
            pile: Vec::new(),
            derniere_evaluation: None,
        }
    }

    pub fn base(&self) -> BaseNumerique {
        self.base
    }

    pub fn valeur(&self) -> f64 {
        self.valeur
    }

    pub fn affichage(&self) -> &str {
        &self.affichage
    }

    pub fn pile(&self) -> &[String] {
        &self.pile
    }

    pub fn derniere_evaluation(&self) -> Option<&Evaluation> {
        self.derniere_evaluation.as_ref()
    }

    /// Fixe la valeur et re-rend l’affichage (tronquée en BIN/HEX).
    fn fixer(&mut self, v: f64) {
        self.valeur = if self.base.est_entiere() && v.is_finite() {
            v.trunc()
        } else {
            v
        };
        self.affichage = rendre(self.valeur, self.base);
    }

    /* ------------------------ Frappe ------------------------ */

    /// Chiffre (0–9, A–F) ou point décimal.
    pub fn saisir(&mut self, symbole: char) {
        if !self.saisie_en_cours {
            self.affichage = "0".to_string();
        }

        if symbole == '.' && self.affichage.contains('.') {
            // deuxième point dans le même opérande : rien
            self.saisie_en_cours = true;
        } else if self.affichage == "0" {
            match symbole {
                // 0 sur 0 : rien ne change (et la frappe ne “démarre” pas)
                '0' => {}
                '.' => {
                    self.affichage.push('.');
                    self.saisie_en_cours = true;
                }
                c => {
                    self.affichage = c.to_string();
                    self.saisie_en_cours = true;
                }
            }
        } else {
            self.affichage.push(symbole);
            self.saisie_en_cours = true;
        }

        self.valeur = lire(&self.affichage, self.base);
    }

    /* ------------------------ Opérations ------------------------ */

    pub fn constante(&mut self, v: f64) {
        self.fixer(v);
        self.saisie_en_cours = false;
    }

    pub fn unaire(&mut self, op: Unaire) {
        self.fixer(op.appliquer(self.valeur));
        self.saisie_en_cours = false;
    }

    /// Confirme l’affichage comme opérande, puis pousse l’opérateur (différé).
    ///
    /// Deux opérateurs d’affilée : l’affichage est confirmé deux fois (`7 + ×` => `7 + 7 ×`).
    pub fn operateur(&mut self, op: Operateur) {
        self.pile.push(self.affichage.clone());
        self.pile.push(op.symbole().to_string());
        self.saisie_en_cours = false;
    }

    /// "=" : confirme l’affichage, évalue toute la pile, vide la pile.
    pub fn egal(&mut self) {
        self.pile.push(self.affichage.clone());

        let evaluation = evaluer(&self.pile, self.base);
        self.fixer(evaluation.resultat);
        self.derniere_evaluation = Some(evaluation);

        self.pile.clear();
        self.saisie_en_cours = false;
    }

    /// AC : tout revient à zéro (la base reste).
    pub fn effacer(&mut self) {
        self.fixer(0.0);
        self.pile.clear();
        self.derniere_evaluation = None;
        self.saisie_en_cours = false;
    }

    /// Changement de base : la valeur est relue dans la base quittée,
    /// tronquée si la nouvelle base est entière, puis re-rendue.
    pub fn changer_base(&mut self, base: BaseNumerique) {
        let ancienne = self.base;
        let v = lire(&self.affichage, ancienne);
        self.base = base;
        self.fixer(v);
        self.saisie_en_cours = false;

        // les opérandes déjà confirmés suivent la base (l’évaluateur lit dans la base active)
        for jeton in &mut self.pile {
            if Operateur::depuis_symbole(jeton).is_none() {
                let mut x = lire(jeton, ancienne);
                if base.est_entiere() && x.is_finite() {
                    x = x.trunc();
                }
                *jeton = rendre(x, base);
            }
        }
    }
}
