// src/config.rs
//
// Ligne de commande (natif seulement ; le web démarre avec les défauts).
//
//   calculatrice_rejeu --var M=7 --var x=-1.5 --titre "Ma calc"

use clap::Parser;
use thiserror::Error;

/// Titre par défaut (natif + web).
pub const TITRE_APP: &str = "Calculatrice à rejeu";

/// Calculatrice à touches : chaque touche est journalisée puis rejouée.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Liaison initiale d’une variable, sous la forme NOM=VALEUR (répétable).
    /// La touche C y revient.
    #[arg(long = "var", value_name = "NOM=VALEUR", value_parser = parse_liaison)]
    pub variables: Vec<(String, f64)>,

    /// Titre de la fenêtre.
    #[arg(long, default_value = TITRE_APP)]
    pub titre: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurLiaison {
    #[error("{0:?} : forme attendue NOM=VALEUR")]
    SansEgal(String),
    #[error("nom de variable vide")]
    NomVide,
    #[error("valeur invalide pour {nom} : {valeur:?}")]
    ValeurInvalide { nom: String, valeur: String },
}

/// "M=7" -> ("M", 7.0). Espaces autour du nom et de la valeur tolérés.
pub fn parse_liaison(s: &str) -> Result<(String, f64), ErreurLiaison> {
    let (nom, valeur) = s
        .split_once('=')
        .ok_or_else(|| ErreurLiaison::SansEgal(s.to_string()))?;

    let nom = nom.trim();
    if nom.is_empty() {
        return Err(ErreurLiaison::NomVide);
    }

    let valeur = valeur.trim();
    let v = valeur
        .parse::<f64>()
        .map_err(|_| ErreurLiaison::ValeurInvalide {
            nom: nom.to_string(),
            valeur: valeur.to_string(),
        })?;

    Ok((nom.to_string(), v))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("M=7", "M", 7.0)]
    #[case("x = -1.5", "x", -1.5)]
    #[case("rayon=1e3", "rayon", 1000.0)]
    fn liaisons_valides(#[case] entree: &str, #[case] nom: &str, #[case] valeur: f64) {
        assert_eq!(parse_liaison(entree), Ok((nom.to_string(), valeur)));
    }

    #[rstest]
    #[case("M7", ErreurLiaison::SansEgal("M7".to_string()))]
    #[case(" =3", ErreurLiaison::NomVide)]
    #[case("M=sept", ErreurLiaison::ValeurInvalide { nom: "M".to_string(), valeur: "sept".to_string() })]
    #[case("M=", ErreurLiaison::ValeurInvalide { nom: "M".to_string(), valeur: String::new() })]
    fn liaisons_invalides(#[case] entree: &str, #[case] attendu: ErreurLiaison) {
        assert_eq!(parse_liaison(entree), Err(attendu));
    }

    #[test]
    fn args_ligne_de_commande() {
        let args = Args::try_parse_from(["calc", "--var", "M=2", "--var", "y=3.5"])
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(
            args.variables,
            vec![("M".to_string(), 2.0), ("y".to_string(), 3.5)]
        );
        assert_eq!(args.titre, TITRE_APP);

        assert!(Args::try_parse_from(["calc", "--var", "M"]).is_err());
    }
}
