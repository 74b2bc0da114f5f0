#[cfg(target_arch = "wasm32")]
fn main() {
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(err) = native::run() {
        eprintln!("graph_cli error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use morph_engine::functions::{FunctionCatalog, FunctionKind};
    use morph_engine::geom::Point3;
    use morph_engine::graph::GridTransitionEngine;
    use morph_engine::graph::config::GraphConfig;
    use morph_engine::graph::transition::Phase;
    use std::fs::{self, File};
    use std::io::{BufWriter, Write};
    use std::path::{Path, PathBuf};
    use std::str::FromStr;

    const USAGE: &str = r#"graph_cli (morph-engine)

USAGE:
  graph_cli list
  graph_cli run [options]

OPTIONS (run):
  --resolution <n>           Points per axis, 10..=100 (default 10)
  --frames <n>               Number of frames to evaluate (default 60)
  --dt <seconds>             Frame delta (default 1/60)
  --function <name|index>    Initial function (default Wave2D)
  --auto                     Cycle through the catalog automatically
  --function-duration <s>    Seconds before switching (default 1.5)
  --lerp-duration <s>        Seconds a morph takes (default 1.0)
  --out <path>               Write the last frame as CSV (index,x,y,z)
  --overwrite                Overwrite an existing output file
  -h, --help                 Show this help
"#;

    pub fn run() -> Result<(), String> {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let mut args = Args::new(args);

        let Some(command) = args.next() else {
            print_usage();
            return Ok(());
        };

        match command.as_str() {
            "list" => {
                print_functions();
                Ok(())
            }
            "run" => cmd_run(&mut args),
            "-h" | "--help" | "help" => {
                print_usage();
                Ok(())
            }
            other => Err(format!("unknown command `{other}`\n\n{USAGE}")),
        }
    }

    fn print_usage() {
        println!("{USAGE}");
    }

    fn print_functions() {
        for entry in FunctionCatalog::global().entries() {
            println!(
                "{:>2}  {:<16} {}",
                entry.kind.ordinal(),
                entry.kind.name(),
                entry.names.join(", ")
            );
        }
    }

    fn cmd_run(args: &mut Args) -> Result<(), String> {
        let mut config = GraphConfig::default();
        let mut frames: usize = 60;
        let mut dt: f64 = 1.0 / 60.0;
        let mut out_path: Option<PathBuf> = None;
        let mut overwrite = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--resolution" => config.resolution = args.parsed("--resolution")?,
                "--frames" => frames = args.parsed("--frames")?,
                "--dt" => dt = args.parsed("--dt")?,
                "--function" => config.initial_function = parse_function(&args.value("--function")?)?,
                "--auto" => config.automatic_transition = true,
                "--function-duration" => config.function_duration = args.parsed("--function-duration")?,
                "--lerp-duration" => config.lerp_duration = args.parsed("--lerp-duration")?,
                "--out" => out_path = Some(PathBuf::from(args.value("--out")?)),
                "--overwrite" => overwrite = true,
                "-h" | "--help" => {
                    print_usage();
                    return Ok(());
                }
                other => return Err(format!("unknown option `{other}`")),
            }
        }

        let dt = validate_dt(dt)?;
        let mut engine = GridTransitionEngine::new(config).map_err(|e| e.to_string())?;
        let catalog = FunctionCatalog::global();
        let mut now = 0.0;
        let mut last_frame = Vec::new();

        for frame in 0..frames {
            last_frame = engine.step(now, dt);

            let state = engine.state();
            let phase = match state.phase() {
                Phase::Idle => "direct".to_owned(),
                Phase::Transitioning { elapsed } => format!(
                    "morph -> {} ({elapsed:.3}s)",
                    catalog.next(state.active())
                ),
            };
            println!(
                "frame {frame:>5}  t={now:>8.3}  active={:<16} {phase}",
                state.active().name()
            );

            now += dt;
        }

        if let Some(path) = out_path {
            write_csv_file(&path, &last_frame, overwrite)?;
            println!("wrote {} points to {}", last_frame.len(), path.display());
        }

        Ok(())
    }

    fn validate_dt(dt: f64) -> Result<f64, String> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(format!("--dt must be a finite, non-negative number, got {dt}"));
        }
        Ok(dt)
    }

    fn parse_function(reference: &str) -> Result<FunctionKind, String> {
        let trimmed = reference.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Ok(FunctionKind::from_ordinal(index));
        }
        FunctionCatalog::global()
            .resolve(trimmed)
            .ok_or_else(|| format!("unknown function `{trimmed}` (see `graph_cli list`)"))
    }

    fn write_csv_file(path: &Path, positions: &[Point3], overwrite: bool) -> Result<(), String> {
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

        writeln!(w, "index,x,y,z").map_err(|e| format!("write csv: {e}"))?;
        for (index, p) in positions.iter().enumerate() {
            writeln!(w, "{index},{},{},{}", p.x, p.y, p.z).map_err(|e| format!("write csv: {e}"))?;
        }

        w.flush().map_err(|e| format!("write csv: {e}"))
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

        fn parsed<T>(&mut self, flag: &str) -> Result<T, String>
        where
            T: FromStr,
            T::Err: std::fmt::Display,
        {
            let raw = self.value(flag)?;
            raw.parse::<T>()
                .map_err(|e| format!("invalid value `{raw}` for {flag}: {e}"))
        }
    }

}
