//! Calcul de π à un nombre arbitraire de décimales.
//!
//! Le noyau est utilisable seul : `calcul_pi::compute_pi(50)`.

pub mod noyau;

pub use noyau::{calculer_pi, compute_pi, DemarchePi, ErreurPi, ParametresScission, ResultatPi};
