use qamscope_rs::qam::{ModulationOrder, build_constellation};

fn main() {
    println!("Supported QAM orders:");
    println!(
        "  {:>9} {:>9} {:>9} {:>9} {:>7}",
        "order", "lattice", "excluded", "symbols", "bits"
    );
    for order in ModulationOrder::ALL {
        let (sx, sy) = order.lattice_sides();
        let c = build_constellation(order);
        println!(
            "  {:>9} {:>9} {:>9} {:>9} {:>7}",
            order.to_string(),
            format!("{}x{}", sx, sy),
            c.excluded.len(),
            c.len(),
            order.bits_per_symbol()
        );
    }
}
