// src/noyau/format.rs
//
// Affichage des nombres (description + écran).
// Règle : un entier garde son ".0" ("4.0", "-3.0") pour que la description
// distingue toujours une valeur saisie d’un symbole.

/// À partir de là (et sous PETIT_MIN), notation scientifique : `{}` écrirait tous les chiffres.
const GRAND_MIN: f64 = 1e16;
const PETIT_MIN: f64 = 1e-4;

pub fn format_nombre(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }

    let a = v.abs();
    if a >= GRAND_MIN || (a != 0.0 && a < PETIT_MIN) {
        format!("{v:e}")
    } else if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

#[cfg(test)]
mod tests {
    use super::format_nombre;

    #[test]
    fn entiers_gardent_le_point_zero() {
        assert_eq!(format_nombre(4.0), "4.0");
        assert_eq!(format_nombre(-3.0), "-3.0");
        assert_eq!(format_nombre(0.0), "0.0");
    }

    #[test]
    fn decimaux_et_valeurs_speciales() {
        assert_eq!(format_nombre(0.5), "0.5");
        assert_eq!(format_nombre(2.25), "2.25");
        assert_eq!(format_nombre(f64::INFINITY), "inf");
        assert_eq!(format_nombre(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_nombre(f64::NAN), "NaN");
    }

    #[test]
    fn tres_grands_et_tres_petits_en_scientifique() {
        assert_eq!(format_nombre(1e20), "1e20");
        assert_eq!(format_nombre(-2.5e300), "-2.5e300");
        assert_eq!(format_nombre(1e-7), "1e-7");
        assert_eq!(format_nombre(1e100f64.powi(3)), "inf");
        // Bornes : 1e15 reste lisible, 0.0001 aussi.
        assert_eq!(format_nombre(1e15), "1000000000000000.0");
        assert_eq!(format_nombre(0.0001), "0.0001");
    }
}
