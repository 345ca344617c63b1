#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(err) = native::run() {
        eprintln!("mobius_cli error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use mobius_engine::geom::{
        GeomMesh, ShapeParameters, build_grid, estimate_edge_length, estimate_surface_area,
        mesh_from_grid,
    };
    use std::fs::{self, File};
    use std::io::{BufWriter, Write};
    use std::path::{Path, PathBuf};

    const DEFAULT_RADIUS: f64 = 1.0;
    const DEFAULT_WIDTH: f64 = 0.4;
    const DEFAULT_RESOLUTION: usize = 300;

    const USAGE: &str = r"mobius_cli (mobius-engine)

USAGE:
  mobius_cli [measure] [options]

OPTIONS:
  --radius <R>        Center radius, > 0 (default 1.0)
  --width <W>         Strip width, > 0 (default 0.4)
  --resolution <N>    Grid resolution, >= 2 (default 300)
  --obj <path>        Also write the sampled strip as an OBJ mesh
  --overwrite         Overwrite an existing OBJ file
  -h, --help          Show this help
";

    pub fn run() -> Result<(), String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut args = Args::new(args);

        let mut radius = DEFAULT_RADIUS;
        let mut width = DEFAULT_WIDTH;
        let mut resolution = DEFAULT_RESOLUTION;
        let mut obj_path: Option<PathBuf> = None;
        let mut overwrite = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "measure" => {}
                "--radius" => radius = args.number("--radius")?,
                "--width" => width = args.number("--width")?,
                "--resolution" => resolution = args.number("--resolution")?,
                "--obj" => obj_path = Some(PathBuf::from(args.value("--obj")?)),
                "--overwrite" => overwrite = true,
                "-h" | "--help" | "help" => {
                    println!("{USAGE}");
                    return Ok(());
                }
                other => return Err(format!("unknown argument `{other}`\n\n{USAGE}")),
            }
        }

        let params = ShapeParameters::new(radius, width, resolution).map_err(|e| e.to_string())?;
        log::info!("measuring Möbius strip R={radius} w={width} n={resolution}");

        let (grid, coords) = build_grid(&params);
        let area = estimate_surface_area(&grid, &coords);
        let edge = estimate_edge_length(&params);

        println!("Surface Area ≈ {area:.4}");
        println!("Edge Length ≈ {edge:.4}");

        if let Some(path) = obj_path {
            let mesh = mesh_from_grid(&grid, &coords);
            write_obj_file(&path, &mesh, "mobius_strip", overwrite)?;
            log::info!(
                "wrote {} vertices / {} triangles to {}",
                mesh.vertex_count(),
                mesh.triangle_count(),
                path.display()
            );
        }

        Ok(())
    }

    fn write_obj_file(path: &Path, mesh: &GeomMesh, name: &str, overwrite: bool) -> Result<(), String> {
        mesh.validate().map_err(|e| format!("mesh validation failed: {e}"))?;

        if path.exists() && !overwrite {
            return Err(format!(
                "refusing to overwrite existing file {} (use --overwrite)",
                path.display()
            ));
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| format!("create dir {}: {e}", parent.display()))?;
        }

        let file = File::create(path).map_err(|e| format!("create {}: {e}", path.display()))?;
        let mut w = BufWriter::new(file);

        writeln!(w, "# mobius-engine mobius_cli").map_err(|e| format!("write obj: {e}"))?;
        writeln!(w, "o {name}").map_err(|e| format!("write obj: {e}"))?;

        for p in &mesh.positions {
            writeln!(w, "v {} {} {}", p[0], p[1], p[2]).map_err(|e| format!("write obj: {e}"))?;
        }

        let has_uvs = mesh.uvs.is_some();
        if let Some(uvs) = mesh.uvs.as_ref() {
            for uv in uvs {
                writeln!(w, "vt {} {}", uv[0], uv[1]).map_err(|e| format!("write obj: {e}"))?;
            }
        }

        for tri in mesh.indices.chunks_exact(3) {
            let a = tri[0] + 1;
            let b = tri[1] + 1;
            let c = tri[2] + 1;

            if has_uvs {
                writeln!(w, "f {a}/{a} {b}/{b} {c}/{c}")
            } else {
                writeln!(w, "f {a} {b} {c}")
            }
            .map_err(|e| format!("write obj: {e}"))?;
        }

        w.flush().map_err(|e| format!("flush {}: {e}", path.display()))
    }

    struct Args {
        args: Vec<String>,
        pos: usize,
    }

    impl Args {
        fn new(args: Vec<String>) -> Self {
            Self { args, pos: 0 }
        }

        fn next(&mut self) -> Option<String> {
            let arg = self.args.get(self.pos)?.clone();
            self.pos += 1;
            Some(arg)
        }

        fn value(&mut self, flag: &str) -> Result<String, String> {
            self.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        }

        fn number<T>(&mut self, flag: &str) -> Result<T, String>
        where
            T: std::str::FromStr,
            T::Err: std::fmt::Display,
        {
            let raw = self.value(flag)?;
            raw.parse()
                .map_err(|e| format!("invalid value `{raw}` for {flag}: {e}"))
        }
    }
}
