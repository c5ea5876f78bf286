// src/noyau/feuille.rs
//
// Feuille : triplet fermé (P, Q, T) pour un seul indice k de la série de Chudnovsky.
// - k = 0 : (1, 1, 13591409)
// - k ≥ 1 : P = (6k−5)(2k−1)(6k−1)
//           Q = k³ · C³/24          (C = 640320)
//           T = ±P · (13591409 + 545140134·k), négatif si k impair
//
// Aucune factorielle : chaque feuille ne dépend que de k.

use num_bigint::BigInt;

use super::fusion::Triplet;

/// C = 640320
pub const C: u64 = 640_320;

/// C³ / 24 (exact : 640320³ = 262537412640768000 est divisible par 24).
pub const C3_SUR_24: u64 = 10_939_058_860_032_000;

/// Terme constant de la série.
pub const A: u64 = 13_591_409;

/// Coefficient linéaire de la série.
pub const B: u64 = 545_140_134;

pub fn feuille(k: u64) -> Triplet {
    if k == 0 {
        return Triplet {
            p: BigInt::from(1),
            q: BigInt::from(1),
            t: BigInt::from(A),
        };
    }

    let kb = BigInt::from(k);

    let p = (BigInt::from(6u32) * &kb - 5u32)
        * (BigInt::from(2u32) * &kb - 1u32)
        * (BigInt::from(6u32) * &kb - 1u32);
    let q = kb.pow(3) * C3_SUR_24;

    let mut t = &p * (BigInt::from(B) * &kb + A);
    if k % 2 == 1 {
        t = -t;
    }

    Triplet { p, q, t }
}
