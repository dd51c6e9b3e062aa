//! Noyau de la calculatrice (sans UI)
//!
//! Organisation interne :
//! - entree.rs      : entrées journalisées (opérande, variable, opération)
//! - operations.rs  : table symbole -> opération (constante, unaire, binaire, "=")
//! - evaluateur.rs  : journal append-only + rejeu (résultat, attente, description)
//! - format.rs      : affichage des nombres

pub mod entree;
pub mod evaluateur;
pub mod format;
pub mod operations;

// API publique minimale
pub use evaluateur::{Evaluation, ExpressionEvaluator};
pub use format::format_nombre;
