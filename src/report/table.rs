use crate::qam::{Constellation, SymbolPoint};
use serde::Serialize;
use std::f64::consts::PI;

/// One row of the symbol table
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SymbolRow {
    /// Position after sorting by phase, starting at 0
    pub symbol: usize,
    pub i: i32,
    pub q: i32,
    pub energy: f64,
    /// Phase in [0, 2) units of π
    pub phase_pi: f64,
}

impl SymbolRow {
    pub fn point(&self) -> SymbolPoint {
        SymbolPoint::new(self.i, self.q)
    }

    /// Cell texts in column order: Symbol, I, Q, Energy, Phase
    pub fn cells(&self) -> [String; 5] {
        [
            self.symbol.to_string(),
            self.i.to_string(),
            self.q.to_string(),
            format!("{:.2}", self.energy),
            format!("{:.2}π", self.phase_pi),
        ]
    }
}

pub const TABLE_HEADERS: [&str; 5] = ["Symbol", "I", "Q", "Energy", "Phase (rad)"];

/// Symbols sorted by phase, numbered from 0
///
/// Symbols with equal phase keep their lattice order.
pub fn tabulate(constellation: &Constellation) -> Vec<SymbolRow> {
    let mut keyed: Vec<(f64, SymbolPoint)> = constellation
        .symbols
        .iter()
        .map(|p| (p.phase(), *p))
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    keyed
        .into_iter()
        .enumerate()
        .map(|(symbol, (phase, p))| SymbolRow {
            symbol,
            i: p.i,
            q: p.q,
            energy: p.energy(),
            phase_pi: phase / PI,
        })
        .collect()
}

/// Split rows into pages of at most `page_rows`
pub fn paginate(rows: &[SymbolRow], page_rows: usize) -> Vec<&[SymbolRow]> {
    rows.chunks(page_rows.max(1)).collect()
}
