//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : adapter les touches au noyau. Toute l’arithmétique passe par
//! `ExpressionEvaluator` ; ici on ne gère que :
//! - la saisie en cours (Repos / Frappe) + validation du point décimal,
//! - le magasin de variables (mémoire M),
//! - le message d’erreur affiché.
//!
//! Contrats :
//! - Une saisie n’atteint le journal que convertie en f64 (à la validation).
//! - Une erreur de saisie ne modifie ni le journal ni la saisie en cours.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::noyau::{format_nombre, Evaluation, ExpressionEvaluator};

/// Nom de la variable mémoire (touches "→M" et "M").
pub const MEMOIRE: &str = "M";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurSaisie {
    #[error("le nombre contient déjà un point décimal")]
    PointDecimalEnDouble,
    #[error("caractère inattendu : {0:?}")]
    ChiffreInattendu(char),
    #[error("nombre invalide : {0:?}")]
    NombreInvalide(String),
}

/// Saisie en cours au clavier.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Saisie {
    #[default]
    Repos,
    Frappe(String),
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    cerveau: ExpressionEvaluator,
    variables: HashMap<String, f64>,
    /// Liaisons de la ligne de commande, restaurées par "C".
    variables_initiales: HashMap<String, f64>,
    saisie: Saisie,

    // --- UX ---
    pub erreur: String,
}

impl AppCalc {
    /// Démarre avec des liaisons initiales (ex: `--var M=7`).
    pub fn avec_variables(variables: impl IntoIterator<Item = (String, f64)>) -> Self {
        let variables: HashMap<String, f64> = variables.into_iter().collect();
        Self {
            variables_initiales: variables.clone(),
            variables,
            ..Self::default()
        }
    }

    /* ------------------------ Touches ------------------------ */

    /// Chiffre ou point décimal.
    pub fn touch_digit(&mut self, chiffre: char) -> Result<(), ErreurSaisie> {
        if !(chiffre.is_ascii_digit() || chiffre == '.') {
            return Err(ErreurSaisie::ChiffreInattendu(chiffre));
        }

        match &mut self.saisie {
            Saisie::Frappe(texte) => {
                if chiffre == '.' && texte.contains('.') {
                    return Err(ErreurSaisie::PointDecimalEnDouble);
                }
                texte.push(chiffre);
            }
            Saisie::Repos => {
                let texte = if chiffre == '.' {
                    "0.".to_string()
                } else {
                    chiffre.to_string()
                };
                self.saisie = Saisie::Frappe(texte);
            }
        }

        self.erreur.clear();
        Ok(())
    }

    pub fn perform_operation(&mut self, symbol: &str) -> Result<(), ErreurSaisie> {
        self.valider_saisie()?;
        debug!(symbol, "touche opération");
        self.cerveau.append_operation(symbol);
        self.erreur.clear();
        Ok(())
    }

    pub fn use_variable(&mut self, name: &str) -> Result<(), ErreurSaisie> {
        self.valider_saisie()?;
        self.cerveau.append_variable(name);
        self.erreur.clear();
        Ok(())
    }

    /// "→M" : la valeur affichée devient la valeur de la variable.
    /// Le journal n’est pas touché : le résultat est recalculé avec la nouvelle liaison.
    pub fn set_variable(&mut self, name: &str) -> Result<(), ErreurSaisie> {
        let valeur = match &self.saisie {
            Saisie::Frappe(texte) => parse_saisie(texte)?,
            Saisie::Repos => self.evaluation().result.unwrap_or(0.0),
        };
        debug!(name, valeur, "liaison variable");
        self.variables.insert(name.to_string(), valeur);
        self.saisie = Saisie::Repos;
        self.erreur.clear();
        Ok(())
    }

    /// Pendant la frappe : efface un caractère. Sinon : undo du journal.
    pub fn undo(&mut self) {
        match &mut self.saisie {
            Saisie::Frappe(texte) => {
                texte.pop();
                if texte.is_empty() {
                    self.saisie = Saisie::Repos;
                }
            }
            Saisie::Repos => self.cerveau.undo(),
        }
        self.erreur.clear();
    }

    /// "C" : journal + saisie ; les variables reviennent aux liaisons initiales.
    pub fn clear(&mut self) {
        debug!("remise à zéro");
        self.cerveau.reset();
        self.variables.clone_from(&self.variables_initiales);
        self.saisie = Saisie::Repos;
        self.erreur.clear();
    }

    /// Utilitaire : placer une erreur (l’état reste intact).
    pub fn set_erreur(&mut self, err: &ErreurSaisie) {
        debug!(%err, "erreur de saisie");
        self.erreur = err.to_string();
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn evaluation(&self) -> Evaluation {
        self.cerveau.evaluate(&self.variables)
    }

    pub fn saisie(&self) -> &Saisie {
        &self.saisie
    }

    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Texte de l’écran : la frappe en cours, sinon le résultat (ou "0").
    pub fn affichage(&self) -> String {
        match &self.saisie {
            Saisie::Frappe(texte) => texte.clone(),
            Saisie::Repos => self
                .evaluation()
                .result
                .map(format_nombre)
                .unwrap_or_else(|| "0".to_string()),
        }
    }

    /* ------------------------ Interne ------------------------ */

    /// Frappe en cours -> opérande dans le journal.
    fn valider_saisie(&mut self) -> Result<(), ErreurSaisie> {
        if let Saisie::Frappe(texte) = &self.saisie {
            let valeur = parse_saisie(texte)?;
            self.cerveau.append_operand(valeur);
            self.saisie = Saisie::Repos;
        }
        Ok(())
    }
}

fn parse_saisie(texte: &str) -> Result<f64, ErreurSaisie> {
    texte
        .parse::<f64>()
        .map_err(|_| ErreurSaisie::NombreInvalide(texte.to_string()))
}
