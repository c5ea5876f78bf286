// src/app.rs
//
// Calcul π — module App (racine)
// ------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter Reglages (pour main.rs: use crate::app::Reglages;)
// - Enchaîner : valider -> noyau -> vue
//
// Important:
// - Le noyau est appelé de façon synchrone ; aucune logique de calcul ici.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::Reglages;`
pub use etat::Reglages;

use anyhow::{Context, Result};
use tracing::info;

use calcul_pi::calculer_pi;

pub fn executer(reglages: &Reglages) -> Result<()> {
    reglages.valider()?;

    info!(
        digits = reglages.digits,
        taches = reglages.taches,
        seuil = reglages.seuil,
        "calcul de π"
    );

    let resultat = calculer_pi(reglages.digits, &reglages.params_scission())
        .with_context(|| format!("calcul de π à {} décimales", reglages.digits))?;

    reglages.afficher(&resultat)
}
