use crate::cli::GeometryArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use cubeio::core::io::geometry::{GeometryAtom, load_geometry_with_width};
use tracing::{info, warn};

pub fn run(args: GeometryArgs, config: &AppConfig) -> Result<()> {
    let width = args.symbol_width.unwrap_or(config.geometry.symbol_width);
    if width == 0 {
        return Err(CliError::Argument(
            "--symbol-width must be at least 1".to_string(),
        ));
    }

    info!("Loading geometry from {:?}", &args.input);
    let atoms = load_geometry_with_width(&args.input, width)
        .map_err(|e| CliError::from_table(&args.input, e))?;

    let unknown = atoms.iter().filter(|a| a.atomic_number().is_none()).count();
    if unknown > 0 {
        warn!("{} atom(s) have symbols with no known element", unknown);
    }

    print!("{}", render(&atoms));
    Ok(())
}

/// One line per atom: symbol, atomic number (0 when unknown) and position in bohr.
pub fn render(atoms: &[GeometryAtom]) -> String {
    atoms
        .iter()
        .map(|atom| {
            let p = &atom.position;
            format!(
                "{:<5} {:3} {:12.6} {:12.6} {:12.6}\n",
                atom.symbol,
                atom.atomic_number().unwrap_or(0),
                p.x,
                p.y,
                p.z
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GeometrySettings, WriterSettings};
    use nalgebra::Point3;
    use std::fs;
    use tempfile::tempdir;

    fn config() -> AppConfig {
        AppConfig {
            writer: WriterSettings {
                title: String::new(),
                comment: String::new(),
                keep_comments: false,
            },
            geometry: GeometrySettings { symbol_width: 5 },
        }
    }

    #[test]
    fn render_prints_symbol_number_and_bohr_coordinates() {
        let atoms = vec![GeometryAtom {
            symbol: "O".to_string(),
            position: Point3::new(1.0, -2.5, 0.0),
        }];
        assert_eq!(
            render(&atoms),
            "O       8     1.000000    -2.500000     0.000000\n"
        );
    }

    #[test]
    fn run_rejects_zero_symbol_width() {
        let args = GeometryArgs {
            input: "unused.xyz".into(),
            symbol_width: Some(0),
        };
        assert!(matches!(run(args, &config()), Err(CliError::Argument(_))));
    }

    #[test]
    fn run_maps_missing_file() {
        let dir = tempdir().unwrap();
        let args = GeometryArgs {
            input: dir.path().join("missing.xyz"),
            symbol_width: None,
        };
        assert!(matches!(run(args, &config()), Err(CliError::MissingFile(_))));
    }

    #[test]
    fn run_reports_malformed_rows_as_parse_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.xyz");
        fs::write(&path, "H 0.0 zero 0.0\n").unwrap();
        let args = GeometryArgs {
            input: path,
            symbol_width: None,
        };
        assert!(matches!(
            run(args, &config()),
            Err(CliError::FileParsing { .. })
        ));
    }
}
