// src/noyau/precision.rs
//
// Planification de la précision
// -----------------------------
// digits -> (termes, prec)
// - ~14 décimales correctes par terme de la série : termes = chiffres/14 + 1
// - précision binaire : ~log2(10) ≈ 3.32 bits par décimale, arrondie à 4 (+ garde)
//
// Trop serré : les derniers chiffres sont tronqués silencieusement.
// Trop large : ne coûte que du temps. On arrondit donc toujours vers le haut.

use tracing::debug;

use super::erreur::{ErreurPi, Resultat};

/// Décimales apportées par chaque terme (≈ 14.18, on prend la borne basse).
pub const DECIMALES_PAR_TERME: u64 = 14;

/// Décimales de garde : la troncature finale reste exacte même si la queue est “…999”.
pub const GARDE_DECIMALES: u64 = 16;

pub const BITS_PAR_CHIFFRE: u64 = 4;

/// Bits de garde pour l’assemblage (√, ×, ÷ tronqués).
pub const BITS_GARDE: u64 = 64;

/// Garde-fou : au-delà, le format décimal (10^digits en u32) déborderait.
pub const CHIFFRES_MAX: i64 = 1_000_000_000;

/// Contexte de précision : immuable une fois calculé.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlanPrecision {
    /// Décimales demandées après le point.
    pub digits: usize,
    /// Nombre de termes N (indices 0..N).
    pub termes: u64,
    /// Précision de travail en bits.
    pub prec: u64,
}

pub fn planifier(digits: i64) -> Resultat<PlanPrecision> {
    if digits <= 0 {
        return Err(ErreurPi::DigitsInvalides(digits));
    }
    if digits > CHIFFRES_MAX {
        return Err(ErreurPi::DigitsTropGrands(digits));
    }

    let chiffres = digits as u64 + GARDE_DECIMALES;
    let plan = PlanPrecision {
        digits: digits as usize,
        termes: chiffres / DECIMALES_PAR_TERME + 1,
        prec: chiffres * BITS_PAR_CHIFFRE + BITS_GARDE,
    };

    debug!(
        digits = plan.digits,
        termes = plan.termes,
        prec = plan.prec,
        "plan de précision"
    );
    Ok(plan)
}
