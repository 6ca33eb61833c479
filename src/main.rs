use log::info;

use cannon_math::desc::{GeomDesc, load_geom_file, parse_geom_json};
use cannon_math::{TransformState, TransformSurface};

const SAMPLE_JSON: &str = r#"
    {
        "matrix": [1, 0, 0, 1, 20, 20],
        "vertices": [
            [0, 0],
            [{"x": 100, "y": 0}, {"x": 25, "y": -40}, {"x": 75, "y": -40}],
            [100, 100],
            [0, 100, 0, 100, -30, 50]
        ]
    }
"#;

fn load_desc() -> cannon_math::Result<GeomDesc> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading geometry from {path}");
            load_geom_file(path)
        }
        None => {
            info!("No descriptor given, using the built-in sample");
            parse_geom_json(SAMPLE_JSON)
        }
    }
}

fn main() -> cannon_math::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let geom = load_desc()?.resolve();

    let mut surface = TransformState::new();
    // Emulate a surface that already carries a device scale.
    surface.set_transform(2.0, 0.0, 0.0, 2.0, 0.0, 0.0);
    geom.matrix.apply(&mut surface);
    info!("matrix  {}", geom.matrix);
    info!("surface {}", surface.current());

    for (i, v) in geom.vertices.iter().enumerate() {
        let on_surface = surface.current().transform_vertex(v);
        info!("vertex {i}: {v} -> {:?}", on_surface.to_array());
    }

    Ok(())
}
