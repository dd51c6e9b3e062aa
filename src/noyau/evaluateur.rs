//! Noyau — évaluateur incrémental à rejeu
//!
//! Les touches pressées sont journalisées (append-only). Le résultat n’est
//! jamais stocké : chaque requête rejoue le journal depuis le début.
//!
//! Conséquences :
//! - `evaluate` est une fonction pure du journal + des liaisons de variables.
//! - `undo` est trivial (retirer la dernière entrée) et toujours cohérent.
//! - Calcul strictement de gauche à droite, binaire résolu dès que possible.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::entree::Input;
use super::format::format_nombre;
use super::operations::{BinaryOp, OperationKind, OperationTable};

/// Sortie d’une évaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// None tant qu’aucun opérande / constante n’est disponible.
    pub result: Option<f64>,
    pub is_pending: bool,
    pub description: String,
}

#[derive(Clone, Copy, Debug)]
struct PendingBinary {
    op: BinaryOp,
    first_operand: f64,
}

impl PendingBinary {
    fn perform(self, second_operand: f64) -> f64 {
        self.op.apply(self.first_operand, second_operand)
    }
}

/// État éphémère du rejeu (reconstruit à chaque requête).
struct EvaluationState {
    accumulator: Option<f64>,
    pending_binary: Option<PendingBinary>,
    description: String,
}

impl EvaluationState {
    fn new() -> Self {
        Self {
            accumulator: None,
            pending_binary: None,
            // Chaque ajout apporte son propre espace de tête.
            description: String::new(),
        }
    }

    /// Opérande droit manquant => on reste en attente.
    fn perform_pending_binary(&mut self) {
        if let (Some(pending), Some(second)) = (self.pending_binary, self.accumulator) {
            self.accumulator = Some(pending.perform(second));
            self.pending_binary = None;
        }
    }

    fn apply(&mut self, kind: OperationKind, symbol: &str) {
        match kind {
            OperationKind::Constant(v) => {
                self.accumulator = Some(v);
                self.description.push(' ');
                self.description.push_str(symbol);
            }
            OperationKind::Unary(op) => {
                let Some(a) = self.accumulator else {
                    return;
                };
                if self.pending_binary.is_some() {
                    self.description
                        .push_str(&format!(" {symbol}({})", format_nombre(a)));
                } else {
                    self.description = format!(" {symbol}({})", self.description);
                }
                self.accumulator = Some(op.apply(a));
            }
            OperationKind::Binary(op) => {
                self.perform_pending_binary();
                if let Some(a) = self.accumulator.take() {
                    self.pending_binary = Some(PendingBinary {
                        op,
                        first_operand: a,
                    });
                    self.description.push(' ');
                    self.description.push_str(symbol);
                }
            }
            OperationKind::Terminator => self.perform_pending_binary(),
        }
    }

    fn finish(self) -> Evaluation {
        let is_pending = self.pending_binary.is_some();
        let suffix = if is_pending { " ..." } else { " =" };
        Evaluation {
            result: self.accumulator,
            is_pending,
            description: self.description + suffix,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ExpressionEvaluator {
    operations: OperationTable,
    inputs: Vec<Input>,
}

impl ExpressionEvaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Évaluateur sur une table non standard (tests, variantes de clavier).
    pub fn with_table(operations: OperationTable) -> Self {
        Self {
            operations,
            inputs: Vec::new(),
        }
    }

    /* ------------------------ Mutations (journal) ------------------------ */

    pub fn append_operand(&mut self, value: f64) {
        debug!(value, "opérande");
        self.inputs.push(Input::Operand(value));
    }

    pub fn append_variable(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!(%name, "variable");
        self.inputs.push(Input::Variable(name));
    }

    /// Stocké même si le symbole est inconnu : la validité se décide au rejeu.
    pub fn append_operation(&mut self, symbol: impl Into<String>) {
        let symbol = symbol.into();
        debug!(%symbol, "opération");
        self.inputs.push(Input::Operation(symbol));
    }

    pub fn undo(&mut self) {
        let retiree = self.inputs.pop();
        debug!(?retiree, "undo");
    }

    pub fn reset(&mut self) {
        debug!(entrees = self.inputs.len(), "reset");
        self.inputs.clear();
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn inputs(&self) -> &[Input] {
        &self.inputs
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Rejoue tout le journal. Ne modifie rien.
    pub fn evaluate(&self, variables: &HashMap<String, f64>) -> Evaluation {
        let mut state = EvaluationState::new();

        for input in &self.inputs {
            match input {
                Input::Operand(v) => {
                    state.accumulator = Some(*v);
                    state.description.push(' ');
                    state.description.push_str(&format_nombre(*v));
                }
                Input::Variable(name) => {
                    state.accumulator = Some(variables.get(name).copied().unwrap_or(0.0));
                    state.description.push(' ');
                    state.description.push_str(name);
                }
                Input::Operation(symbol) => match self.operations.lookup(symbol) {
                    Some(kind) => state.apply(kind, symbol),
                    None => trace!(%symbol, "symbole inconnu ignoré"),
                },
            }
        }

        state.finish()
    }

    /* ------------------------ Raccourcis (sans liaisons) ------------------------ */

    pub fn result(&self) -> Option<f64> {
        self.evaluate(&HashMap::new()).result
    }

    pub fn is_pending(&self) -> bool {
        self.evaluate(&HashMap::new()).is_pending
    }

    pub fn description(&self) -> String {
        self.evaluate(&HashMap::new()).description
    }
}
