use crate::cli::ChargesArgs;
use crate::error::{CliError, Result};
use cubeio::core::io::charges::{ChargeTable, load_charges};
use tracing::info;

pub fn run(args: ChargesArgs) -> Result<()> {
    info!("Loading charge table from {:?}", &args.input);
    let table = load_charges(&args.input).map_err(|e| CliError::from_table(&args.input, e))?;
    print!("{}", summarize(&table));
    Ok(())
}

pub fn summarize(table: &ChargeTable) -> String {
    let mut out = format!("Rows:    {}\nColumns: {}\n", table.nrows(), table.ncols());
    for index in 0..table.ncols() {
        let sum: f64 = table.column(index).unwrap_or_default().iter().sum();
        out.push_str(&format!("  column {:2}: sum {:12.6}\n", index + 1, sum));
    }
    out
}
