// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : description (… si en attente, = sinon) + valeur affichée
// - Pavé : chiffres, opérations du noyau, mémoire M, undo, C
//
// Note :
// - La vue ne calcule rien : chaque clic devient un appel à etat.rs.
// - Les erreurs de saisie s’affichent sous l’écran, l’état reste intact.

use eframe::egui;

use super::etat::{AppCalc, ErreurSaisie, MEMOIRE};
use crate::noyau::format_nombre;

/// Taille commune des touches (tactile OK).
const TOUCHE: [f32; 2] = [56.0, 40.0];

/// Pavé principal : 4 colonnes, l’opération binaire en bout de ligne.
const PAVE: [[Touche; 4]; 4] = [
    [Touche::Chiffre('7'), Touche::Chiffre('8'), Touche::Chiffre('9'), Touche::Operation("÷")],
    [Touche::Chiffre('4'), Touche::Chiffre('5'), Touche::Chiffre('6'), Touche::Operation("✕")],
    [Touche::Chiffre('1'), Touche::Chiffre('2'), Touche::Chiffre('3'), Touche::Operation("-")],
    [Touche::Chiffre('0'), Touche::Chiffre('.'), Touche::Operation("="), Touche::Operation("+")],
];

/// Fonctions + constantes, au-dessus du pavé.
const FONCTIONS: [[Touche; 4]; 2] = [
    [Touche::Operation("π"), Touche::Operation("e"), Touche::Operation("√"), Touche::Operation("cos")],
    [Touche::Operation("±"), Touche::Operation("x²"), Touche::Operation("x³"), Touche::Operation("1/x")],
];

/// Mémoire + édition.
const ACTIONS: [Touche; 4] = [
    Touche::StockerVariable,
    Touche::Variable,
    Touche::Undo,
    Touche::Clear,
];

#[derive(Clone, Copy, Debug)]
enum Touche {
    Chiffre(char),
    Operation(&'static str),
    StockerVariable,
    Variable,
    Undo,
    Clear,
}

impl Touche {
    fn label(self) -> String {
        match self {
            Touche::Chiffre(c) => c.to_string(),
            Touche::Operation(s) => s.to_string(),
            Touche::StockerVariable => format!("→{MEMOIRE}"),
            Touche::Variable => MEMOIRE.to_string(),
            Touche::Undo => "undo".to_string(),
            Touche::Clear => "C".to_string(),
        }
    }

    fn tip(self) -> Option<&'static str> {
        match self {
            Touche::StockerVariable => Some("Range la valeur affichée dans M"),
            Touche::Variable => Some("Utilise la variable M"),
            Touche::Undo => Some("Efface le dernier chiffre, sinon annule la dernière touche"),
            Touche::Clear => Some("Remise à zéro (calcul + mémoire, liaisons --var conservées)"),
            Touche::Chiffre(_) | Touche::Operation(_) => None,
        }
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_ecran(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_grille(ui, "touches_fonctions", &FONCTIONS);
                ui.add_space(6.0);
                self.ui_grille(ui, "touches_pave", &PAVE);
                ui.add_space(6.0);
                self.ui_grille(ui, "touches_actions", &[ACTIONS]);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let evaluation = self.evaluation();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.monospace(evaluation.description.as_str());
                ui.add_space(4.0);
                ui.heading(egui::RichText::new(self.affichage()).monospace());
            });

        ui.horizontal(|ui| {
            let m = self
                .variable(MEMOIRE)
                .map(format_nombre)
                .unwrap_or_else(|| "—".to_string());
            ui.label(format!("{MEMOIRE} = {m}"));

            if evaluation.is_pending {
                ui.separator();
                ui.label("opération en attente");
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_grille<const N: usize>(&mut self, ui: &mut egui::Ui, id: &str, lignes: &[[Touche; N]]) {
        egui::Grid::new(id)
            .num_columns(N)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in lignes {
                    for touche in ligne {
                        self.bouton(ui, *touche);
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, touche: Touche) {
        let mut resp = ui.add_sized(TOUCHE, egui::Button::new(touche.label()));
        if let Some(tip) = touche.tip() {
            resp = resp.on_hover_text(tip);
        }
        if !resp.clicked() {
            return;
        }

        if let Err(err) = self.appuyer(touche) {
            self.set_erreur(&err);
        }
    }

    fn appuyer(&mut self, touche: Touche) -> Result<(), ErreurSaisie> {
        match touche {
            Touche::Chiffre(c) => self.touch_digit(c),
            Touche::Operation(symbol) => self.perform_operation(symbol),
            Touche::StockerVariable => self.set_variable(MEMOIRE),
            Touche::Variable => self.use_variable(MEMOIRE),
            Touche::Undo => {
                self.undo();
                Ok(())
            }
            Touche::Clear => {
                self.clear();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::operations::OperationTable;

    #[test]
    fn chaque_touche_operation_est_connue_du_noyau() {
        let table = OperationTable::standard();
        for touche in FONCTIONS.iter().chain(PAVE.iter()).flatten() {
            if let Touche::Operation(symbol) = touche {
                assert!(table.lookup(symbol).is_some(), "touche {symbol:?} sans opération");
            }
        }
    }

    #[test]
    fn toutes_les_operations_ont_une_touche() {
        let touches: Vec<&str> = FONCTIONS
            .iter()
            .chain(PAVE.iter())
            .flatten()
            .filter_map(|t| match t {
                Touche::Operation(s) => Some(*s),
                _ => None,
            })
            .collect();
        for symbol in OperationTable::standard().symbols() {
            assert!(touches.contains(&symbol), "opération {symbol:?} sans touche");
        }
    }

    #[test]
    fn appuyer_enchaine_les_touches() {
        let mut app = AppCalc::default();
        for t in [
            Touche::Chiffre('9'),
            Touche::Operation("√"),
            Touche::StockerVariable,
            Touche::Clear,
        ] {
            app.appuyer(t).unwrap();
        }
        assert_eq!(app.variable(MEMOIRE), None);

        for t in [
            Touche::Chiffre('9'),
            Touche::Operation("√"),
            Touche::StockerVariable,
            Touche::Operation("+"),
            Touche::Variable,
            Touche::Operation("="),
        ] {
            app.appuyer(t).unwrap();
        }
        assert_eq!(app.variable(MEMOIRE), Some(3.0));
        assert_eq!(app.evaluation().result, Some(6.0));
    }

    #[test]
    fn appuyer_remonte_les_erreurs() {
        let mut app = AppCalc::default();
        app.appuyer(Touche::Chiffre('1')).unwrap();
        app.appuyer(Touche::Chiffre('.')).unwrap();
        assert_eq!(
            app.appuyer(Touche::Chiffre('.')),
            Err(ErreurSaisie::PointDecimalEnDouble)
        );
        assert_eq!(Touche::StockerVariable.label(), "→M");
    }
}
