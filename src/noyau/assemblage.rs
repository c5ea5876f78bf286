// src/noyau/assemblage.rs
//
// Assemblage final : triplet racine [0, N) -> π
//
//   π ≈ (C^{3/2} · Q) / (12 · T)
//
// P est ignoré. Une seule racine (√C), puis ×C, ×Q, ÷(12·T), tout à `prec` bits.

use num_bigint::BigInt;
use num_traits::Signed;

use super::erreur::{ErreurPi, Resultat};
use super::feuille::C;
use super::flottant::Flottant;
use super::fusion::Triplet;
use super::precision::PlanPrecision;

pub fn assembler(racine: &Triplet, plan: &PlanPrecision) -> Resultat<Flottant> {
    if !racine.q.is_positive() {
        return Err(ErreurPi::TripletInvalide("Q racine ≤ 0".into()));
    }
    // T racine = somme dominée par 13591409 : toujours > 0 pour une série correcte
    if !racine.t.is_positive() {
        return Err(ErreurPi::TripletInvalide("T racine ≤ 0".into()));
    }

    let prec = plan.prec;

    let c = Flottant::depuis_entier(&BigInt::from(C), prec);
    let c_3_2 = c.racine()?.mul(&c);

    let q = Flottant::depuis_entier(&racine.q, prec);
    let douze_t = Flottant::depuis_entier(&(&racine.t * 12u32), prec);

    c_3_2.mul(&q).div(&douze_t)
}

/// "3." + exactement `digits` chiffres (troncature, jamais d’arrondi vers le haut).
pub fn formater(pi: &Flottant, digits: usize) -> String {
    pi.en_decimal(digits)
}
