// src/noyau/operations.rs
//
// Opérateurs binaires (différés jusqu’à "=") et opérations unaires (immédiates).
// Division par zéro : sémantique IEEE (inf / NaN), jamais d’erreur.

use super::trig::{cos_degres, sin_degres};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn symbole(&self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Moins => "-",
            Operateur::Fois => "×",
            Operateur::Divise => "/",
        }
    }

    /// Reconnaît un jeton de la pile d’opérations (accepte aussi "x" et "*").
    pub fn depuis_symbole(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Operateur::Plus),
            "-" => Some(Operateur::Moins),
            "×" | "x" | "*" => Some(Operateur::Fois),
            "/" => Some(Operateur::Divise),
            _ => None,
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
        }
    }

    pub fn associatif_droite(&self) -> bool {
        false
    }

    pub fn appliquer(&self, gauche: f64, droite: f64) -> f64 {
        match self {
            Operateur::Plus => gauche + droite,
            Operateur::Moins => gauche - droite,
            Operateur::Fois => gauche * droite,
            Operateur::Divise => gauche / droite,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unaire {
    Oppose,
    Pourcent,
    Sinus,
    Cosinus,
}

impl Unaire {
    pub fn appliquer(&self, x: f64) -> f64 {
        match self {
            Unaire::Oppose => -x,
            Unaire::Pourcent => x / 100.0,
            Unaire::Sinus => sin_degres(x),
            Unaire::Cosinus => cos_degres(x),
        }
    }
}
