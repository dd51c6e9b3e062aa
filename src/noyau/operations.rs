// src/noyau/operations.rs
//
// Table symbole -> opération
// --------------------------
// - Fixée à la construction, jamais modifiée ensuite.
// - Recherche exacte (sensible à la casse).
// - Symbole inconnu => None (l’évaluateur l’ignore au rejeu).
//
// Les fonctions sont des enums + match (pas de closures stockées) :
// testables une par une, comparables, copiables.

use std::collections::HashMap;
use std::f64::consts;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOp {
    Sqrt,
    Cos,
    Negate,
    Square,
    Cube,
    Reciprocal,
}

impl UnaryOp {
    /// Aucune vérification de domaine : √(-1) = NaN, 1/0 = inf (IEEE-754).
    pub fn apply(self, a: f64) -> f64 {
        match self {
            UnaryOp::Sqrt => a.sqrt(),
            UnaryOp::Cos => a.cos(),
            UnaryOp::Negate => -a,
            UnaryOp::Square => a.powi(2),
            UnaryOp::Cube => a.powi(3),
            UnaryOp::Reciprocal => 1.0 / a,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Multiply,
    Divide,
    Add,
    Subtract,
}

impl BinaryOp {
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Multiply => a * b,
            BinaryOp::Divide => a / b,
            BinaryOp::Add => a + b,
            BinaryOp::Subtract => a - b,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OperationKind {
    Constant(f64),
    Unary(UnaryOp),
    Binary(BinaryOp),
    /// "=" : force la résolution de l’opération binaire en attente.
    Terminator,
}

#[derive(Clone, Debug)]
pub struct OperationTable {
    operations: HashMap<&'static str, OperationKind>,
}

impl OperationTable {
    /// Table standard des touches de la calculatrice.
    pub fn standard() -> Self {
        use OperationKind::*;

        let entries = [
            ("π", Constant(consts::PI)),
            ("e", Constant(consts::E)),
            ("√", Unary(UnaryOp::Sqrt)),
            ("cos", Unary(UnaryOp::Cos)),
            ("±", Unary(UnaryOp::Negate)),
            ("x²", Unary(UnaryOp::Square)),
            ("x³", Unary(UnaryOp::Cube)),
            ("1/x", Unary(UnaryOp::Reciprocal)),
            ("✕", Binary(BinaryOp::Multiply)),
            ("÷", Binary(BinaryOp::Divide)),
            ("+", Binary(BinaryOp::Add)),
            ("-", Binary(BinaryOp::Subtract)),
            ("=", Terminator),
        ];

        Self {
            operations: entries.into_iter().collect(),
        }
    }

    pub fn lookup(&self, symbol: &str) -> Option<OperationKind> {
        self.operations.get(symbol).copied()
    }

    /// Symboles connus (ordre non garanti).
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.operations.keys().copied()
    }
}

impl Default for OperationTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("√", 9.0, 3.0)]
    #[case("cos", 0.0, 1.0)]
    #[case("±", 2.5, -2.5)]
    #[case("x²", -3.0, 9.0)]
    #[case("x³", -2.0, -8.0)]
    #[case("1/x", 4.0, 0.25)]
    fn unaires(#[case] symbol: &str, #[case] a: f64, #[case] attendu: f64) {
        let table = OperationTable::standard();
        match table.lookup(symbol) {
            Some(OperationKind::Unary(op)) => assert_eq!(op.apply(a), attendu),
            autre => panic!("{symbol:?} devrait être unaire, obtenu {autre:?}"),
        }
    }

    #[rstest]
    #[case("✕", 4.0, 5.0, 20.0)]
    #[case("÷", 9.0, 2.0, 4.5)]
    #[case("+", 3.0, 4.0, 7.0)]
    #[case("-", 3.0, 4.0, -1.0)]
    fn binaires(#[case] symbol: &str, #[case] a: f64, #[case] b: f64, #[case] attendu: f64) {
        let table = OperationTable::standard();
        match table.lookup(symbol) {
            Some(OperationKind::Binary(op)) => assert_eq!(op.apply(a, b), attendu),
            autre => panic!("{symbol:?} devrait être binaire, obtenu {autre:?}"),
        }
    }

    #[test]
    fn constantes_et_egal() {
        let table = OperationTable::standard();
        assert_eq!(table.lookup("π"), Some(OperationKind::Constant(consts::PI)));
        assert_eq!(table.lookup("e"), Some(OperationKind::Constant(consts::E)));
        assert_eq!(table.lookup("="), Some(OperationKind::Terminator));
    }

    #[test]
    fn symboles_inconnus_et_casse() {
        let table = OperationTable::standard();
        assert_eq!(table.lookup("sin"), None);
        assert_eq!(table.lookup("COS"), None);
        assert_eq!(table.lookup("E"), None);
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn domaine_ieee754_sans_erreur() {
        assert!(UnaryOp::Sqrt.apply(-1.0).is_nan());
        assert_eq!(UnaryOp::Reciprocal.apply(0.0), f64::INFINITY);
        assert_eq!(BinaryOp::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(BinaryOp::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn treize_symboles() {
        let mut symboles: Vec<_> = OperationTable::default().symbols().collect();
        symboles.sort_unstable();
        assert_eq!(symboles.len(), 13);
        assert!(symboles.contains(&"1/x"));
    }
}
