// src/noyau/entree.rs
//
// Entrées journalisées par l’évaluateur.
// L’ordre d’ajout EST l’ordre de rejeu : une entrée n’est jamais modifiée
// après coup (seulement retirée par undo / reset).

#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// Nombre déjà converti en f64 par la couche de présentation.
    Operand(f64),
    /// Nom de variable, résolu au moment de l’évaluation (0.0 si absent).
    Variable(String),
    /// Symbole d’opération, validé seulement au rejeu.
    Operation(String),
}
