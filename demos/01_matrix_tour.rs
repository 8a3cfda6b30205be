//! 01 - Matrix Tour
//!
//! Headless demo: compose the rotation matrix of a few catalog objects at
//! several timestamps and print them. Shows the composer and catalog
//! without opening a window.
//!
//! Run with: `cargo run --example 01_matrix_tour`

use hyperwire_core::{Catalog, Family};
use hyperwire_math::compose_rotation;

fn main() {
    let catalog = Catalog::built_in().expect("catalog build failed");

    let picks = [
        (Family::Hypercube, 4),
        (Family::Simplex, 5),
        (Family::CrossPolytope, 6),
    ];

    for (family, dims) in picks {
        let obj = catalog.get(family, dims).expect("registered object");
        println!("=== {} ===", obj.name());
        println!(
            "{} edges, {} rotation planes, scale {}",
            obj.edge_count(),
            obj.schedule().len(),
            obj.scale()
        );

        for t in [0.0f32, 1.0, 2.5] {
            let m = compose_rotation(obj.dimensions(), obj.schedule(), t, 1.0)
                .expect("schedule validated at build");
            println!("t = {:.1}s:", t);
            for row in 0..obj.dimensions() {
                let cells: Vec<String> = (0..obj.dimensions())
                    .map(|col| format!("{:6.3}", m.get(row, col)))
                    .collect();
                println!("  [{}]", cells.join(", "));
            }
        }
        println!();
    }
}
