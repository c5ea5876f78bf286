// src/noyau/lecture.rs

use num_bigint::BigInt;
use num_traits::Signed;

/* ------------------------ Décimal (scaled -> texte) ------------------------ */

pub fn pow10(n: usize) -> BigInt {
    // n ≤ CHIFFRES_MAX (1e9) : tient dans u32
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
/// Toujours exactement `digits` chiffres après le point (zéros de tête conservés).
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    if digits == 0 {
        return if neg {
            format!("-{int_part}")
        } else {
            format!("{int_part}")
        };
    }

    let frac = format!("{:0>width$}", frac_part.to_str_radix(10), width = digits);

    if neg {
        format!("-{int_part}.{frac}")
    } else {
        format!("{int_part}.{frac}")
    }
}
