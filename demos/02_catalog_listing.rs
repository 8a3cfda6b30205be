//! 02 - Catalog Listing
//!
//! Prints every built-in object with its geometry and attribute-layout
//! metadata.
//!
//! Run with: `cargo run --example 02_catalog_listing`

use hyperwire_core::Catalog;

fn main() {
    let catalog = Catalog::built_in().expect("catalog build failed");

    println!(
        "{:<20} {:>6} {:>8} {:>7} {:>7}",
        "object", "edges", "vertices", "groups", "stride"
    );
    for obj in catalog.iter() {
        println!(
            "{:<20} {:>6} {:>8} {:>7} {:>7}",
            obj.name(),
            obj.edge_count(),
            obj.vertex_count(),
            obj.num_attribute_groups(),
            obj.stride_bytes(),
        );
    }
    println!("\n{} objects total", catalog.len());
}
