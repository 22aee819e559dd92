use crate::error::FeedError;
use crate::models::{BlendReport, Composition, DietProblem};

/// Display a solved blend as a formatted table.
pub fn display_blend(report: &BlendReport) {
    println!();
    println!("=== Blend ===");
    println!();

    let max_name_len = report
        .portions
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or(10);

    for (i, portion) in report.portions.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - {:>10.3} units | {:>10.3} weight",
            i + 1,
            portion.name,
            portion.quantity,
            portion.weight,
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    println!(
        "Achieved weight: {:.3} (target {:.3}, sigma {:.3})",
        report.total_weight, report.target_weight, report.sigma
    );
    for (component, (achieved, target)) in Composition::COMPONENTS.into_iter().zip(
        report
            .achieved
            .as_array()
            .into_iter()
            .zip(report.targets.as_array()),
    ) {
        println!(
            "{:<6} {:>6.1}% (target {:>5.1}%, off by {:+.2} pp)",
            component,
            achieved * 100.0,
            target * 100.0,
            (achieved - target) * 100.0
        );
    }
    println!();
}

/// Echo the inputs of a problem before solving it.
pub fn display_problem(problem: &DietProblem) {
    println!();
    println!(
        "Targets: muscle {:.0}% / organ {:.0}% / heart {:.0}% / bone {:.0}%",
        problem.target.muscle * 100.0,
        problem.target.organ * 100.0,
        problem.target.heart * 100.0,
        problem.target.bone * 100.0
    );
    println!(
        "Target weight {:.3}, sigma {:.3}, {} ingredient(s)",
        problem.target_weight,
        problem.sigma,
        problem.ingredients.len()
    );
    println!();
}

/// Print an error with a prefix per error shape, so a field range problem,
/// a model rule violation, and solver infeasibility read differently.
pub fn explain_error(err: &FeedError) {
    match err {
        FeedError::OutOfRange { .. } => eprintln!("Field error: {err}"),
        FeedError::InvalidModel(_) => eprintln!("Model error: {err}"),
        FeedError::Infeasible => {
            eprintln!("Error: {err}");
            eprintln!("Try widening sigma, relaxing the targets, or adding ingredients.");
        }
        _ => eprintln!("Error: {err}"),
    }
}
