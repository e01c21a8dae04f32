use crate::qam::{ModulationOrder, SymbolPoint};
use std::collections::HashSet;
use tracing::debug;

/// A generated constellation
#[derive(Clone, Debug)]
pub struct Constellation {
    pub order: ModulationOrder,
    /// Usable symbols in lattice order (x-major, y-minor)
    pub symbols: Vec<SymbolPoint>,
    /// Corner points removed to shape cross orders, empty for square orders
    pub excluded: Vec<SymbolPoint>,
}

impl Constellation {
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Largest absolute coordinate over symbols and excluded points
    pub fn max_abs_coordinate(&self) -> i32 {
        self.symbols
            .iter()
            .chain(self.excluded.iter())
            .map(|p| p.i.abs().max(p.q.abs()))
            .max()
            .unwrap_or(0)
    }
}

/// Odd coordinates in `[-side+1, side-1]`
fn odd_axis(side: i32) -> impl Iterator<Item = i32> + Clone {
    (-side + 1..side).step_by(2)
}

/// Every lattice point for the given side lengths, origin included if the parity puts one there
pub fn full_lattice(side_len_x: i32, side_len_y: i32) -> Vec<SymbolPoint> {
    let ys = odd_axis(side_len_y);
    odd_axis(side_len_x)
        .flat_map(|x| ys.clone().map(move |y| SymbolPoint::new(x, y)))
        .collect()
}

/// Corner blocks removed from a `side_len_x x side_len_y` lattice
///
/// `square_size = floor(sqrt(exclusion_count / 4))` points per edge in each corner.
pub fn corner_exclusions(
    side_len_x: i32,
    side_len_y: i32,
    exclusion_count: usize,
) -> Vec<SymbolPoint> {
    if exclusion_count == 0 {
        return Vec::new();
    }

    let square_size = ((exclusion_count / 4) as f64).sqrt() as i32;
    let mut excluded = Vec::with_capacity((square_size * square_size * 4) as usize);
    for i in 0..square_size {
        for j in 0..square_size {
            let corner = SymbolPoint::new(side_len_x - 1 - 2 * i, side_len_y - 1 - 2 * j);
            excluded.extend([
                corner,
                corner.mirrored(true, false),
                corner.mirrored(false, true),
                corner.mirrored(true, true),
            ]);
        }
    }
    excluded
}

/// Build the symbol grid and excluded corner set for `order`
pub fn build_constellation(order: ModulationOrder) -> Constellation {
    let (side_len_x, side_len_y) = order.lattice_sides();
    let exclusion_count = order.exclusion_count();

    let excluded = corner_exclusions(side_len_x, side_len_y, exclusion_count);
    let excluded_set: HashSet<SymbolPoint> = excluded.iter().copied().collect();

    let symbols: Vec<SymbolPoint> = full_lattice(side_len_x, side_len_y)
        .into_iter()
        .filter(|p| !p.is_origin())
        .filter(|p| !excluded_set.contains(p))
        .collect();

    debug!(
        "{}: lattice {}x{}, {} excluded, {} symbols",
        order,
        side_len_x,
        side_len_y,
        excluded.len(),
        symbols.len()
    );

    Constellation {
        order,
        symbols,
        excluded,
    }
}
