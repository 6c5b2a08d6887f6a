// src/noyau/trace.rs
//
// Composant Trace (ligne d’expression)
// ------------------------------------
// Suite ordonnée de jetons d’affichage : chiffres, ".", opérateurs, constantes,
// jetons enveloppés ("sin(30)"), "%". Chaque touche ajoute son jeton puis une règle
// de réparation garde la ligne lisible :
//
// - jamais deux opérateurs binaires consécutifs
// - jamais d’opérateur nu en tête (un moins de tête est un signe)
// - chaque "sin(" / "cos(" est refermé dans la même pression
//
// La trace ne lit jamais le registre : elle ne voit que les touches.

use super::touches::Touche;

const ZERO: &str = "0";
const POINT: &str = ".";
const MOINS: &str = "-";

pub fn est_operateur(jeton: &str) -> bool {
    matches!(jeton, "+" | "-" | "×" | "/")
}

fn est_chiffre(c: char) -> bool {
    c.is_ascii_digit() || ('A'..='F').contains(&c)
}

/// Chiffres et points seulement (un morceau d’opérande encore “ouvert”).
pub fn est_numerique(jeton: &str) -> bool {
    !jeton.is_empty() && jeton.chars().all(|c| est_chiffre(c) || c == '.')
}

/// Opérande “fermé” : constante, fonction, pourcentage, inf/NaN…
/// Un chiffre tapé après ne s’y colle pas, il le remplace.
fn est_ferme(operande: &[String]) -> bool {
    operande.iter().any(|j| !est_numerique(j))
}

/// Balayage arrière : index qui suit l’opérateur le plus proche (0 si aucun).
/// `jetons[borne..]` est l’opérande courant, sans son signe.
pub fn borne_operande(jetons: &[String]) -> usize {
    jetons
        .iter()
        .rposition(|j| est_operateur(j))
        .map_or(0, |i| i + 1)
}

/// Vrai si le jeton juste avant `borne` est un signe moins
/// (en tête de trace, ou derrière un autre opérateur) et non une soustraction.
pub fn signe_avant(jetons: &[String], borne: usize) -> bool {
    borne > 0 && jetons[borne - 1] == MOINS && (borne == 1 || est_operateur(&jetons[borne - 2]))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    jetons: Vec<String>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ligne d’expression, telle qu’affichée.
    pub fn texte(&self) -> String {
        self.jetons.concat()
    }

    pub fn effacer(&mut self) {
        self.jetons.clear();
    }

    pub fn appuyer(&mut self, touche: Touche) {
        let symbole = touche.symbole();
        match touche {
            Touche::Effacer => self.jetons.clear(),
            Touche::Sinus | Touche::Cosinus => self.envelopper(&symbole),
            Touche::Oppose => self.basculer_signe(),
            Touche::Egal => self.regle_egal(symbole),
            Touche::Plus | Touche::Moins | Touche::Fois | Touche::Divise => {
                self.regle_operateur(symbole)
            }
            Touche::Pi | Touche::E => self.regle_constante(symbole),
            Touche::Chiffre(_) => self.regle_chiffre(symbole),
            Touche::Point => self.regle_point(),
            Touche::Pourcent => self.regle_pourcent(symbole),
        }
        tracing::trace!(touche = %touche, trace = %self.texte(), "trace");
    }

    /* ------------------------ Règles ------------------------ */

    /// Début de l’opérande courant, signe compris.
    fn debut_avec_signe(&self) -> usize {
        let borne = borne_operande(&self.jetons);
        if signe_avant(&self.jetons, borne) {
            borne - 1
        } else {
            borne
        }
    }

    /// Retire l’opérande courant (et son signe).
    fn retirer_operande(&mut self) {
        let debut = self.debut_avec_signe();
        self.jetons.truncate(debut);
    }

    /// sin / cos : l’opérande courant passe dans "f(...)".
    /// Trace vide => "f(0)" ; rien après un opérateur => "f()".
    fn envelopper(&mut self, nom: &str) {
        let cache = if self.jetons.is_empty() {
            ZERO.to_string()
        } else {
            let debut = self.debut_avec_signe();
            self.jetons.drain(debut..).collect::<String>()
        };
        self.jetons.push(format!("{nom}({cache})"));
    }

    /// +/- : insère ou retire un signe devant l’opérande courant.
    /// Jamais deux signes empilés : une seconde pression annule la première.
    fn basculer_signe(&mut self) {
        if self.jetons.is_empty() {
            return;
        }
        let borne = borne_operande(&self.jetons);
        if signe_avant(&self.jetons, borne) {
            self.jetons.remove(borne - 1);
        } else {
            self.jetons.insert(borne, MOINS.to_string());
        }
    }

    /// "=" : ajouté puis retiré s’il termine la trace (re-pression sans effet).
    fn regle_egal(&mut self, symbole: String) {
        self.jetons.push(symbole);
        if self.jetons.last().is_some_and(|j| j == "=") {
            self.jetons.pop();
        }
    }

    /// Opérateur : "0" devant s’il arrive seul, et il remplace un opérateur en suspens.
    fn regle_operateur(&mut self, symbole: String) {
        while self.jetons.last().is_some_and(|j| est_operateur(j)) {
            self.jetons.pop();
        }
        if self.jetons.is_empty() {
            self.jetons.push(ZERO.to_string());
        }
        self.jetons.push(symbole);
    }

    /// π / e : remplace tout l’opérande courant.
    fn regle_constante(&mut self, symbole: String) {
        self.retirer_operande();
        self.jetons.push(symbole);
    }

    /// Chiffre : remplace un opérande fermé ou un "0" de remplissage.
    /// Une trace réduite à "0" reste vide.
    fn regle_chiffre(&mut self, symbole: String) {
        let borne = borne_operande(&self.jetons);
        let operande = &self.jetons[borne..];

        if est_ferme(operande) {
            self.retirer_operande();
        } else if operande.len() == 1 && operande[0] == ZERO {
            self.jetons.pop();
        }
        self.jetons.push(symbole);

        if self.jetons.len() == 1 && self.jetons[0] == ZERO {
            self.jetons.clear();
        }
    }

    /// Point : un seul par opérande, "0" devant si l’opérande est vide.
    fn regle_point(&mut self) {
        let borne = borne_operande(&self.jetons);
        let operande = &self.jetons[borne..];

        if est_ferme(operande) {
            self.retirer_operande();
        } else if operande.iter().any(|j| j == POINT) {
            return;
        }

        if borne_operande(&self.jetons) == self.jetons.len() {
            self.jetons.push(ZERO.to_string());
        }
        self.jetons.push(POINT.to_string());
    }

    /// % : "0" devant seulement sur une trace vide.
    /// Après un opérateur, le registre applique % à l’affichage confirmé : pas de "0" inventé.
    fn regle_pourcent(&mut self, symbole: String) {
        if self.jetons.is_empty() {
            self.jetons.push(ZERO.to_string());
        }
        self.jetons.push(symbole);
    }
}
