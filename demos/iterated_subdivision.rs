//! # Iterated Subdivision Example
//!
//! This example subdivides a single colored triangle several times and shows
//! how the complex grows and where the minted attributes come from:
//!
//! 1. **Growth table** - vertex and simplex counts per round
//! 2. **Minted attributes** - colors, coordinates, and radii of the nine
//!    vertices minted for the first triangle
//! 3. **Validation** - every round leaves a structurally valid complex
//!
//! ## Usage
//!
//! ```bash
//! cargo run --example iterated_subdivision
//! ```

use chromatic::prelude::*;

const ROUNDS: usize = 3;

/// Builds a single triangle with one vertex per color.
fn colored_triangle() -> Complex<f64, String> {
    let vertices: VertexSet = (0..3).map(VertexId::new).collect();
    let simplexes = vec![Simplex::from([0, 1, 2])];
    let coordinates: CoordinateMap<f64> = [(0.0, 0.0), (1.0, 0.0), (0.5, 0.866_025)]
        .into_iter()
        .enumerate()
        .map(|(id, (x, y))| (VertexId::new(id as u64), Point::new(x, y)))
        .collect();
    let colors: ColorMap<String> = ["red", "green", "blue"]
        .into_iter()
        .enumerate()
        .map(|(id, color)| (VertexId::new(id as u64), color.to_owned()))
        .collect();
    let radii: RadiusMap<f64> = (0..3).map(|id| (VertexId::new(id), 0.05)).collect();
    Complex::new(vertices, simplexes, colors, coordinates, radii)
}

fn main() {
    println!("============================================================");
    println!("Iterated Chromatic Subdivision of a Single Triangle");
    println!("============================================================\n");

    let mut complex = colored_triangle();
    complex.is_valid().expect("Triangle should be valid");

    println!("Growth per round (each round makes 13 children per triangle):");
    println!(
        "  round 0: {} vertices, {} simplexes",
        complex.number_of_vertices(),
        complex.number_of_simplexes()
    );
    for round in 1..=ROUNDS {
        complex = complex.subdivide().expect("Subdivision should succeed");
        complex
            .is_valid()
            .expect("Subdivision output should be valid");
        println!(
            "  round {round}: {} vertices, {} simplexes",
            complex.number_of_vertices(),
            complex.number_of_simplexes()
        );
    }

    // Re-run the first round alone to inspect the minted block. The nine
    // fresh vertices for the only triangle take ids 3 through 11.
    println!("\nMinted vertices of the first round:");
    let once = colored_triangle()
        .subdivide()
        .expect("Subdivision should succeed");
    for id in 3..12 {
        let vertex = VertexId::new(id);
        let color = once.color_of(vertex).expect("Minted color");
        let point = once.coordinate_of(vertex).expect("Minted coordinate");
        let radius = once.radius_of(vertex).expect("Minted radius");
        println!(
            "  vertex {vertex}: color {color:>5}, at ({:+.4}, {:+.4}), radius {radius:.3}",
            point.x(),
            point.y()
        );
    }

    println!("\nThe first six are edge vertices and inherit an endpoint color;");
    println!("the last three sit near the barycenter, one per corner color.");

    println!("\n============================================================");
    println!("Example complete!");
    println!("============================================================");
}
