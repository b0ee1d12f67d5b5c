//! # Hexagonal Fan Snapshot Example
//!
//! This example builds the classic six-triangle hexagonal fan and walks it
//! through the delayed-snapshot pipeline:
//!
//! 1. **Plain rounds** - untagged chromatic subdivision, one and two rounds
//! 2. **Delayed snapshots** - tagged rounds plus resilience pruning at
//!    several resilience levels
//! 3. **Rendering data** - the one-skeleton extracted from a snapshot
//! 4. **Serialization** - the snapshot as a serde JSON document
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example hexagonal_fan
//! ```

use chromatic::prelude::*;

/// Builds a fan of six triangles around a hub vertex at the origin, with the
/// rim vertices on the unit hexagon.
fn hexagonal_fan() -> Complex<f64, String> {
    let positions = [
        (0.0, 0.0),
        (1.0, 0.0),
        (0.5, 0.866_025),
        (-0.5, 0.866_025),
        (-1.0, 0.0),
        (-0.5, -0.866_025),
        (0.5, -0.866_025),
    ];
    let palette = [
        "red", "yellow", "green", "yellow", "green", "yellow", "green",
    ];

    let vertices: VertexSet = (0..7).map(VertexId::new).collect();
    let simplexes: Vec<Simplex> = (1..=6)
        .map(|k| {
            let next = if k == 6 { 1 } else { k + 1 };
            Simplex::from([0, k, next])
        })
        .collect();
    let coordinates: CoordinateMap<f64> = positions
        .into_iter()
        .enumerate()
        .map(|(id, (x, y))| (VertexId::new(id as u64), Point::new(x, y)))
        .collect();
    let colors: ColorMap<String> = palette
        .into_iter()
        .enumerate()
        .map(|(id, color)| (VertexId::new(id as u64), color.to_owned()))
        .collect();
    let radii: RadiusMap<f64> = (0..7).map(|id| (VertexId::new(id), 0.05)).collect();

    Complex::new(vertices, simplexes, colors, coordinates, radii)
}

fn print_stats(label: &str, complex: &Complex<f64, String>) {
    println!(
        "  {label}: {} vertices, {} simplexes",
        complex.number_of_vertices(),
        complex.number_of_simplexes()
    );
}

fn main() {
    println!("============================================================");
    println!("Hexagonal Fan: Subdivision and Delayed Snapshots");
    println!("============================================================\n");

    let fan = hexagonal_fan();
    fan.is_valid().expect("Fan should be a valid complex");
    print_stats("input fan", &fan);

    // Plain rounds: each round replaces every triangle with 13 children.
    println!("\nPlain subdivision rounds:");
    let once = fan.subdivide().expect("First round should succeed");
    print_stats("after one round", &once);
    let twice = once.subdivide().expect("Second round should succeed");
    print_stats("after two rounds", &twice);

    // Delayed snapshots at descending resilience levels. The resilience
    // value decides which carrier dimensions survive the final prune:
    // at 2.0 everything survives, at 0.0 only barycentric carriers do.
    println!("\nDelayed snapshots:");
    for resilience in [2.0, 1.0, 0.0] {
        let snapshot = fan
            .delayed_snapshot(resilience)
            .expect("Snapshot should succeed");
        print_stats(&format!("resilience {resilience:.1}"), &snapshot);
    }

    // The 1-resilient snapshot is the one the protocol-complex literature
    // usually draws, so extract its rendering data.
    let snapshot = fan
        .delayed_snapshot(1.0)
        .expect("Snapshot should succeed");
    let scene = Scene::from_complex(&snapshot);
    let skeleton = scene.skeleton();
    println!("\nOne-skeleton of the 1-resilient snapshot:");
    println!(
        "  {} nodes, {} edges, {} triangles",
        skeleton.nodes().len(),
        skeleton.edges().len(),
        skeleton.triangles().len()
    );

    let json = serde_json::to_string(&snapshot).expect("Snapshot should serialize");
    println!("\nSerialized snapshot: {} bytes of JSON", json.len());

    println!("\n============================================================");
    println!("Example complete!");
    println!("============================================================");
}
