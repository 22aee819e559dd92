use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::{BlendReport, DietProblem};

/// Load a blend problem from a JSON file.
pub fn load_problem<P: AsRef<Path>>(path: P) -> Result<DietProblem> {
    let content = fs::read_to_string(path)?;
    let problem: DietProblem = serde_json::from_str(&content)?;
    Ok(problem)
}

/// Save a blend problem to a JSON file.
pub fn save_problem<P: AsRef<Path>>(path: P, problem: &DietProblem) -> Result<()> {
    let json = serde_json::to_string_pretty(problem)?;
    fs::write(path, json)?;
    Ok(())
}

/// Save a solved-blend report to a JSON file.
pub fn save_report<P: AsRef<Path>>(path: P, report: &BlendReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

/// Export per-ingredient quantities to a CSV file, one row per portion
/// plus a totals row.
pub fn export_csv<P: AsRef<Path>>(path: P, report: &BlendReport) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["ingredient", "quantity", "weight"])?;
    for portion in &report.portions {
        wtr.write_record([
            portion.name.clone(),
            format!("{:.3}", portion.quantity),
            format!("{:.3}", portion.weight),
        ])?;
    }
    wtr.write_record([
        "total".to_string(),
        String::new(),
        format!("{:.3}", report.total_weight),
    ])?;

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Composition, Ingredient};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_problem() -> DietProblem {
        DietProblem::new(
            Composition::new(0.75, 0.10, 0.05, 0.10),
            4.0,
            vec![Ingredient::new(
                Some("Chicken thigh".to_string()),
                Composition::new(0.85, 0.0, 0.0, 0.15),
                0.3,
            )],
        )
    }

    #[test]
    fn test_problem_roundtrip() {
        let problem = sample_problem();

        let file = NamedTempFile::new().unwrap();
        save_problem(file.path(), &problem).unwrap();

        let reloaded = load_problem(file.path()).unwrap();
        assert_eq!(reloaded, problem);
        assert!(reloaded.outcome().is_none());
    }

    #[test]
    fn test_load_defaults_sigma() {
        let json = r#"{
            "Targets": {"Muscle": 0.75, "Organ": 0.10, "Heart": 0.05, "Bone": 0.10},
            "TargetWeight": 4.0,
            "Ingredients": [
                {"Name": "Chicken thigh", "Muscle": 0.85, "Organ": 0, "Heart": 0, "Bone": 0.15, "WeightConversion": 0.3}
            ]
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let problem = load_problem(file.path()).unwrap();
        assert_eq!(problem.sigma, 0.05);
        assert_eq!(
            problem.ingredients[0].name.as_deref(),
            Some("Chicken thigh")
        );
        assert_eq!(problem.ingredients[0].weight_conversion, 0.3);
    }

    #[test]
    fn test_csv_export() {
        use crate::models::IngredientPortion;

        let report = BlendReport {
            total_weight: 3.95,
            achieved: Composition::new(0.74, 0.11, 0.05, 0.10),
            target_weight: 4.0,
            targets: Composition::new(0.75, 0.10, 0.05, 0.10),
            sigma: 0.05,
            portions: vec![IngredientPortion {
                name: "Chicken thigh".to_string(),
                quantity: 13.167,
                weight: 3.95,
            }],
        };

        let file = NamedTempFile::new().unwrap();
        export_csv(file.path(), &report).unwrap();

        let content = fs::read_to_string(file.path()).unwrap();
        assert!(content.starts_with("ingredient,quantity,weight"));
        assert!(content.contains("Chicken thigh,13.167,3.950"));
        assert!(content.contains("total,,3.950"));
    }
}
