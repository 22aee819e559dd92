mod persistence;

pub use persistence::{export_csv, load_problem, save_problem, save_report};
