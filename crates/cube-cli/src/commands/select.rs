use crate::cli::SelectArgs;
use crate::error::Result;
use cubeio::core::selection::{compact_selection, expand_selection};
use tracing::{debug, info};

pub fn run(args: SelectArgs) -> Result<()> {
    let indices = expand_selection(&args.expression)?;
    info!("Selection expands to {} indices", indices.len());
    debug!("Compact form: {}", compact_selection(&indices));
    println!("{}", render(&indices));
    Ok(())
}

/// Zero-based indices separated by single spaces.
pub fn render(indices: &[usize]) -> String {
    indices
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn render_joins_with_spaces() {
        assert_eq!(render(&[2, 3, 4, 7]), "2 3 4 7");
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn run_accepts_a_selection_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("atoms.sel");
        fs::write(&path, "1-3\n").unwrap();

        let args = SelectArgs {
            expression: vec![path.to_string_lossy().into_owned()],
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn run_reports_invalid_selection() {
        let args = SelectArgs {
            expression: vec!["5-2".to_string()],
        };
        assert!(matches!(run(args), Err(CliError::Selection(_))));
    }
}
