// src/app/vue.rs
//
// Vue (texte) — stdout + fichier
// ------------------------------
// Objectifs :
// - stdout ne porte QUE les chiffres (le journal tracing part sur stderr)
// - --sortie : écriture du résultat complet dans un fichier, aperçu optionnel
// - démarche (termes, bits, threads, durées) toujours journalisée

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use calcul_pi::{DemarchePi, ResultatPi};

use super::etat::Reglages;

impl Reglages {
    /// Rendu principal : à appeler après un calcul réussi.
    pub fn afficher(&self, r: &ResultatPi) -> Result<()> {
        match &self.sortie {
            Some(chemin) => {
                fs::write(chemin, format!("{}\n", r.texte))
                    .with_context(|| format!("écriture de {}", chemin.display()))?;
                info!("résultat écrit dans {}", chemin.display());

                if let Some(n) = self.apercu {
                    println!("{}", apercu(&r.texte, n));
                }
            }
            None => {
                let mut out = io::stdout().lock();
                writeln!(out, "{}", r.texte).context("écriture sur stdout")?;
            }
        }

        journaliser_demarche(&r.demarche);
        Ok(())
    }
}

/// "3." + au plus `n` décimales (texte ASCII : découpe sûre).
fn apercu(texte: &str, n: usize) -> &str {
    let fin = n.saturating_add(2).min(texte.len());
    &texte[..fin]
}

fn journaliser_demarche(d: &DemarchePi) {
    info!(
        digits = d.plan.digits,
        termes = d.plan.termes,
        prec = d.plan.prec,
        threads = d.threads,
        seuil = d.seuil,
        bits_q = d.bits_q,
        bits_t = d.bits_t,
        "démarche : scission {:?}, assemblage {:?}",
        d.duree_scission,
        d.duree_assemblage
    );
}
