//! Noyau — évaluation (pipeline au "=")
//!
//! pile d’opérations -> RPN (shunting-yard) -> valeur -> arrondi 5 décimales
//!
//! Remarque : la démarche (jetons + RPN en texte) est gardée à côté du résultat,
//! pour le panneau d’explication et le journal.

use super::base::BaseNumerique;
use super::rpn::{eval_rpn, format_rpn, to_rpn};
use super::trig::arrondir;

#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub resultat: f64,
    pub jetons: String,
    pub rpn: String,
}

/// API du noyau : évalue la pile confirmée, jamais d’erreur.
pub fn evaluer(pile: &[String], base: BaseNumerique) -> Evaluation {
    let rpn = to_rpn(pile, base);
    let resultat = arrondir(eval_rpn(&rpn));

    let evaluation = Evaluation {
        resultat,
        jetons: pile.join(" "),
        rpn: format_rpn(&rpn, base),
    };

    tracing::debug!(
        jetons = %evaluation.jetons,
        rpn = %evaluation.rpn,
        resultat,
        "évaluation"
    );
    if !resultat.is_finite() {
        tracing::debug!(resultat, "résultat non fini");
    }

    evaluation
}
