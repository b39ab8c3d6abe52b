use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use simplexo_mps::read_mps;
use simplexo_solver::solve_model;

/// Tableau simplex LP solver for strict fixed-column MPS files
#[derive(Parser)]
#[command(name = "simplexo", version, about)]
struct Cli {
    /// MPS file to solve
    file: PathBuf,

    /// Pivot rule: "bland" (default), "dantzig"
    #[arg(long, default_value = "")]
    criteria: String,

    /// Iteration limit shared by both simplex phases
    #[arg(long, default_value_t = 1000)]
    niter: usize,

    /// Print the solution as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let model = read_mps(&cli.file)
        .with_context(|| format!("cannot read {}", cli.file.display()))?;
    let solution = solve_model(&model, &cli.criteria, cli.niter)
        .with_context(|| format!("cannot solve {}", cli.file.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
        return Ok(());
    }
    println!("value = {:.6}", solution.value);
    match model.bounds {
        Some(ref bounds) => {
            for (bd, xj) in bounds.iter().zip(&solution.x) {
                println!("{:<8} = {:.6}", bd.name, xj);
            }
        }
        None => {
            for (j, xj) in solution.x.iter().enumerate() {
                println!("x{:<7} = {:.6}", j, xj);
            }
        }
    }
    Ok(())
}
