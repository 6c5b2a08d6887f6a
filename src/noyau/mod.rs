//! Noyau de la calculatrice (sans UI, sans I/O)
//!
//! Organisation interne :
//! - touches.rs    : ensemble fermé des touches du pavé
//! - base.rs       : rendu / relecture d’une valeur en DEC, BIN, HEX
//! - operations.rs : opérateurs binaires (différés) + unaires (immédiats)
//! - trig.rs       : sin/cos en degrés + arrondi 5 décimales
//! - rpn.rs        : shunting-yard + évaluation postfixe
//! - eval.rs       : pipeline du "="
//! - registre.rs   : composant Entrée/Registre
//! - trace.rs      : composant Trace (ligne d’expression)
//! - moteur.rs     : une pression = une transition

pub mod base;
pub mod eval;
pub mod moteur;
pub mod operations;
pub mod registre;
pub mod rpn;
pub mod touches;
pub mod trace;
pub mod trig;

#[cfg(test)]
mod tests_moteur;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use base::BaseNumerique;
pub use moteur::Moteur;
pub use touches::Touche;
