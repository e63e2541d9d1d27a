//! Noise field gallery demo.
//!
//! Renders one panel per noise family into a single grayscale strip and
//! writes it as a binary PGM.
//!
//! Run with: `cargo run -p loam-noise --example noise_field`

use glam::{Vec2, ivec2};
use loam_noise::{
    CellReturn, Fbm, GradientNoise2D, Noise2D, SmoothVoronoi2D, Voronoi2D, Voronoise2D,
};

const PANEL: usize = 256;

fn main() {
    println!("Rendering noise field gallery...");

    let panels: Vec<(&str, Box<dyn Noise2D>)> = vec![
        (
            "fbm",
            Box::new(Fbm::new(GradientNoise2D::with_seed(42.0)).octaves(6)),
        ),
        (
            "ridged",
            Box::new(
                Fbm::new(GradientNoise2D::with_seed(42.0))
                    .octaves(5)
                    .ridged(true),
            ),
        ),
        (
            "voronoi_edge",
            Box::new(Voronoi2D::with_seed(7.0).return_type(CellReturn::Edge)),
        ),
        (
            // The field repeats every 1.0, so the 8x UV scan below shows
            // an 8x8 grid of identical tiles.
            "smooth_voronoi_tiled",
            Box::new(SmoothVoronoi2D::with_seed(7.0).period(ivec2(8, 8))),
        ),
        (
            "voronoise",
            Box::new(Voronoise2D::with_seed(3.0).jitter(1.0).smoothness(0.0)),
        ),
    ];

    let width = PANEL * panels.len();
    let height = PANEL;
    let mut pixels = vec![0u8; width * height];

    for (panel, (name, noise)) in panels.iter().enumerate() {
        // Scan the panel once to normalize its own value range.
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        let mut values = vec![0.0f32; PANEL * PANEL];
        for y in 0..PANEL {
            for x in 0..PANEL {
                // Scale UV to get nice detail
                let uv = Vec2::new(x as f32 / PANEL as f32 * 8.0, y as f32 / PANEL as f32 * 8.0);
                let v = noise.sample(uv);
                min = min.min(v);
                max = max.max(v);
                values[y * PANEL + x] = v;
            }
        }

        let span = if max > min { max - min } else { 1.0 };
        for y in 0..PANEL {
            for x in 0..PANEL {
                let v = (values[y * PANEL + x] - min) / span;
                pixels[y * width + panel * PANEL + x] = (v * 255.0) as u8;
            }
        }
        println!("  {name}: [{min:.3}, {max:.3}]");
    }

    let mut pgm = format!("P5\n{width} {height}\n255\n").into_bytes();
    pgm.extend_from_slice(&pixels);

    let output_path = "noise_field_output.pgm";
    match std::fs::write(output_path, &pgm) {
        Ok(_) => println!("Wrote {}", output_path),
        Err(e) => eprintln!("Failed to write PGM: {}", e),
    }
}
