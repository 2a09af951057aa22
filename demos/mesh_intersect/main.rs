//! Intersects two ASCII triangle meshes and prints the resulting segments.
//!
//! Usage:
//! ```text
//! cargo run --example mesh_intersect -- first.stl second.stl
//! RUST_LOG=shapekern=debug cargo run --example mesh_intersect -- a.stl b.stl
//! ```

use shapekern::io::load_ascii_mesh;
use shapekern::{Kernel, Result};

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for shapekern.
    // Override with RUST_LOG env var (e.g. RUST_LOG=shapekern=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("shapekern=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [first, second] = args.as_slice() else {
        eprintln!("usage: mesh_intersect <mesh-a> <mesh-b>");
        std::process::exit(2);
    };

    let mesh_a = load_ascii_mesh(first)?;
    let mesh_b = load_ascii_mesh(second)?;
    println!(
        "{first}: {} triangles, {second}: {} triangles",
        mesh_a.len(),
        mesh_b.len()
    );

    let kernel = Kernel::default();
    let segments = kernel.intersect_meshes(&mesh_a, &mesh_b);
    println!("{} intersection segments", segments.len());
    for seg in &segments {
        println!(
            "({:.6}, {:.6}, {:.6}) -> ({:.6}, {:.6}, {:.6})",
            seg.start.x, seg.start.y, seg.start.z, seg.end.x, seg.end.y, seg.end.z
        );
    }
    Ok(())
}
