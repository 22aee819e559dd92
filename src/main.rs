use clap::Parser;
use std::path::Path;

use ferret_blend_rs::cli::{Cli, Command};
use ferret_blend_rs::error::Result;
use ferret_blend_rs::interface::{
    collect_problem, display_blend, display_problem, explain_error, prompt_yes_no,
};
use ferret_blend_rs::models::{BlendReport, Composition, DietProblem, Ingredient};
use ferret_blend_rs::solver::Microlp;
use ferret_blend_rs::state::{export_csv, load_problem, save_problem, save_report};

fn main() {
    if let Err(e) = run() {
        explain_error(&e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Solve {
            output,
            csv,
            interactive,
        } => cmd_solve(&cli.file, output.as_deref(), csv.as_deref(), interactive),
        Command::Check => cmd_check(&cli.file),
        Command::Init { force } => cmd_init(&cli.file, force),
    }
}

/// Solve the blend problem and display the result.
fn cmd_solve(
    file_path: &str,
    output: Option<&str>,
    csv: Option<&str>,
    interactive: bool,
) -> Result<()> {
    let path = Path::new(file_path);

    let mut problem = if interactive {
        let problem = collect_problem()?;
        if prompt_yes_no(&format!("Save problem to {file_path}?"), true)? {
            save_problem(path, &problem)?;
            println!("Problem saved.");
        }
        problem
    } else {
        if !path.exists() {
            eprintln!("Problem file not found: {file_path}");
            eprintln!("Run 'ferret_blend init' to create a starter file, or pass --interactive.");
            return Ok(());
        }
        load_problem(path)?
    };

    display_problem(&problem);
    problem.validate()?;

    println!("Solving...");
    problem.solve(Microlp)?;

    if let Some(report) = BlendReport::from_problem(&problem) {
        display_blend(&report);

        if let Some(out) = output {
            save_report(out, &report)?;
            println!("Report written to {out}");
        }
        if let Some(out) = csv {
            export_csv(out, &report)?;
            println!("Quantities exported to {out}");
        }
    }

    Ok(())
}

/// Validate the problem file without solving.
fn cmd_check(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Problem file not found: {file_path}");
        return Ok(());
    }

    let problem = load_problem(path)?;
    problem.validate()?;

    println!(
        "Problem is well-formed: {} ingredient(s), target weight {:.3}, sigma {:.3}.",
        problem.ingredients.len(),
        problem.target_weight,
        problem.sigma
    );
    Ok(())
}

/// Write a starter problem file.
fn cmd_init(file_path: &str, force: bool) -> Result<()> {
    let path = Path::new(file_path);

    if path.exists() && !force {
        eprintln!("{file_path} already exists. Pass --force to overwrite.");
        return Ok(());
    }

    save_problem(path, &starter_problem())?;
    println!("Starter problem written to {file_path}");
    println!("Edit the ingredient list, then run 'ferret_blend solve'.");
    Ok(())
}

/// A feasible example: whole-prey-style targets and a small chicken-based
/// ingredient list.
fn starter_problem() -> DietProblem {
    DietProblem::new(
        Composition::new(0.75, 0.10, 0.05, 0.10),
        4.0,
        vec![
            Ingredient::new(
                Some("Chicken thigh".to_string()),
                Composition::new(0.85, 0.0, 0.0, 0.15),
                0.3,
            ),
            Ingredient::new(
                Some("Chicken liver".to_string()),
                Composition::new(0.0, 1.0, 0.0, 0.0),
                0.04,
            ),
            Ingredient::new(
                Some("Chicken heart".to_string()),
                Composition::new(0.0, 0.0, 1.0, 0.0),
                0.01,
            ),
        ],
    )
}
