// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir la pile d’opérations (textes confirmés par les opérateurs) en RPN (postfix)
// - Puis évaluer la RPN en une seule passe avec une pile d’opérandes
//
// Règles:
// - Un jeton qui est un opérateur (+ - × /) passe par la pile d’opérateurs
// - Un jeton lisible dans la base active devient un nombre
// - Tout autre jeton est transparent : ignoré, sans toucher aux piles
//
// NOTE:
// - "-7" est un nombre, "-" seul est un opérateur (on teste l’opérateur d’abord).

use super::base::{essayer_lire, BaseNumerique};
use super::operations::Operateur;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Op(Operateur),
}

/// Convertit la pile d’opérations en RPN (notation polonaise inversée).
///
/// Exemple:
///   pile: ["7", "+", "3", "×", "2"]
///   rpn:  [7, 3, 2, ×, +]
pub fn to_rpn(pile: &[String], base: BaseNumerique) -> Vec<Jeton> {
    let mut out: Vec<Jeton> = Vec::new();
    let mut ops: Vec<Operateur> = Vec::new();

    for brut in pile {
        if let Some(op) = Operateur::depuis_symbole(brut) {
            // dépile tant que la précédence/associativité exige de sortir l'opérateur du haut
            while let Some(&top) = ops.last() {
                let doit_pop = if op.associatif_droite() {
                    top.precedence() > op.precedence()
                } else {
                    top.precedence() >= op.precedence()
                };
                if !doit_pop {
                    break;
                }
                out.push(Jeton::Op(top));
                ops.pop();
            }
            ops.push(op);
        } else if let Some(v) = essayer_lire(brut, base) {
            out.push(Jeton::Nombre(v));
        } else {
            tracing::trace!(jeton = %brut, "jeton transparent ignoré");
        }
    }

    // vide la pile ops (LIFO)
    while let Some(op) = ops.pop() {
        out.push(Jeton::Op(op));
    }

    out
}

/// Évalue une RPN.
///
/// - opérateur : premier dépilé = droite, second = gauche
/// - résultat : sommet de la pile, 0 si elle est vide
pub fn eval_rpn(rpn: &[Jeton]) -> f64 {
    let mut st: Vec<f64> = Vec::new();

    for jeton in rpn {
        match *jeton {
            Jeton::Nombre(v) => st.push(v),
            Jeton::Op(op) => match (st.pop(), st.pop()) {
                (Some(droite), Some(gauche)) => st.push(op.appliquer(gauche, droite)),
                // opérande manquant : on garde ce qu’on a, l’opérateur ne compte pas
                (Some(seul), None) => st.push(seul),
                _ => {}
            },
        }
    }

    st.last().copied().unwrap_or(0.0)
}

/// Format utilitaire (démarche / journal) : RPN en texte.
pub fn format_rpn(rpn: &[Jeton], base: BaseNumerique) -> String {
    rpn.iter()
        .map(|j| match j {
            Jeton::Nombre(v) => super::base::rendre(*v, base),
            Jeton::Op(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
