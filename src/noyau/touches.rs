// src/noyau/touches.rs
//
// Touches du pavé : ensemble fermé.
// Une pression = une touche, rien d’autre n’entre dans le noyau.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::operations::{Operateur, Unaire};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    /// 0–9 puis A–F (pavé HEX). Toujours en majuscule.
    Chiffre(char),
    Point,

    Plus,
    Moins,
    Fois,
    Divise,

    Egal,
    Effacer,

    Oppose,
    Pourcent,
    Sinus,
    Cosinus,

    Pi,
    E,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("touche inconnue: {0:?}")]
pub struct ToucheInconnue(pub String);

impl Touche {
    /// Texte canonique de la touche (c’est aussi le jeton ajouté à la trace).
    pub fn symbole(&self) -> String {
        match self {
            Touche::Chiffre(c) => c.to_string(),
            Touche::Point => ".".to_string(),
            Touche::Plus => "+".to_string(),
            Touche::Moins => "-".to_string(),
            Touche::Fois => "×".to_string(),
            Touche::Divise => "/".to_string(),
            Touche::Egal => "=".to_string(),
            Touche::Effacer => "AC".to_string(),
            Touche::Oppose => "+/-".to_string(),
            Touche::Pourcent => "%".to_string(),
            Touche::Sinus => "sin".to_string(),
            Touche::Cosinus => "cos".to_string(),
            Touche::Pi => "π".to_string(),
            Touche::E => "e".to_string(),
        }
    }

    pub fn operateur(&self) -> Option<Operateur> {
        match self {
            Touche::Plus => Some(Operateur::Plus),
            Touche::Moins => Some(Operateur::Moins),
            Touche::Fois => Some(Operateur::Fois),
            Touche::Divise => Some(Operateur::Divise),
            _ => None,
        }
    }

    pub fn unaire(&self) -> Option<Unaire> {
        match self {
            Touche::Oppose => Some(Unaire::Oppose),
            Touche::Pourcent => Some(Unaire::Pourcent),
            Touche::Sinus => Some(Unaire::Sinus),
            Touche::Cosinus => Some(Unaire::Cosinus),
            _ => None,
        }
    }
}

impl fmt::Display for Touche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbole())
    }
}

impl FromStr for Touche {
    type Err = ToucheInconnue;

    /// Symboles canoniques + quelques alias clavier (x, *, pi, neg).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let touche = match t {
            "." | "," => Touche::Point,
            "+" => Touche::Plus,
            "-" => Touche::Moins,
            "×" | "x" | "*" => Touche::Fois,
            "/" | "÷" => Touche::Divise,
            "=" => Touche::Egal,
            "AC" | "ac" => Touche::Effacer,
            "+/-" | "±" | "neg" => Touche::Oppose,
            "%" => Touche::Pourcent,
            "sin" => Touche::Sinus,
            "cos" => Touche::Cosinus,
            "π" | "pi" => Touche::Pi,
            "e" => Touche::E,
            _ => {
                let mut chars = t.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_digit() || ('A'..='F').contains(&c) => {
                        Touche::Chiffre(c)
                    }
                    _ => return Err(ToucheInconnue(t.to_string())),
                }
            }
        };
        Ok(touche)
    }
}
