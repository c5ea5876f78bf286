//! src/app/etat.rs
//!
//! Réglages de la ligne de commande (sans calcul, sans affichage).
//!
//! Rôle : porter ce que l’utilisateur demande (digits, fichier de sortie, threads,
//! seuil) et le traduire en paramètres du noyau.
//!
//! Contrats :
//! - Aucun calcul ici.
//! - digits ≤ 0 passe tel quel : c’est le noyau qui le rejette (erreur typée).
//! - Défense en profondeur : borne haute sur digits (anti-gel).

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use calcul_pi::noyau::scission::SEUIL_PARALLELE;
use calcul_pi::ParametresScission;

/// Précision par défaut (comme le programme d’origine).
pub const DIGITS_DEFAUT: i64 = 10_000;

/// Garde-fou : au-delà, mémoire et durée explosent pour une ligne de commande.
pub const DIGITS_MAX: i64 = 100_000_000;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "calcul_pi",
    version,
    about = "π à N décimales (série de Chudnovsky, scission binaire parallèle)"
)]
pub struct Reglages {
    /// Nombre de décimales après le point.
    #[arg(
        value_name = "DIGITS",
        env = "PI_DIGITS",
        default_value_t = DIGITS_DEFAUT,
        allow_negative_numbers = true
    )]
    pub digits: i64,

    /// Écrit le résultat dans ce fichier (stdout sinon).
    #[arg(short, long, value_name = "FICHIER")]
    pub sortie: Option<PathBuf>,

    /// Threads du pool de calcul (0 = tous les cœurs).
    #[arg(short, long, env = "PI_TACHES", default_value_t = 0)]
    pub taches: usize,

    /// Longueur de plage au-delà de laquelle la scission part en parallèle.
    #[arg(long, default_value_t = SEUIL_PARALLELE)]
    pub seuil: u64,

    /// Avec --sortie : n’affiche que les N premières décimales sur stdout.
    #[arg(long, value_name = "N")]
    pub apercu: Option<usize>,
}

impl Reglages {
    pub fn valider(&self) -> Result<()> {
        if self.digits > DIGITS_MAX {
            bail!(
                "{} décimales demandées : maximum {} en ligne de commande",
                self.digits,
                DIGITS_MAX
            );
        }
        Ok(())
    }

    pub fn params_scission(&self) -> ParametresScission {
        ParametresScission {
            seuil: self.seuil,
            taches: self.taches,
        }
    }
}
