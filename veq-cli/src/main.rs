use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use veq_core::compare::structural_eq;
use veq_core::data::Value;
use veq_core::hash::stable_hash;
use veq_core::kind::kind_of;

#[derive(Parser)]
#[command(name = "veq")]
#[command(about = "Structural equality and stable hashing for JSON value trees")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two documents structurally
    Compare {
        /// Left document
        a: PathBuf,

        /// Right document
        b: PathBuf,
    },
    /// Print the stable hash of a document
    Hash {
        /// Input file
        file: PathBuf,
    },
    /// Show structure information about a document
    Info {
        /// Input file
        file: PathBuf,
    },
    /// Create example data files
    Example {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Compare { a, b } => {
            return compare_files(a, b);
        }
        Commands::Hash { file } => {
            let value = load_value(file)?;
            println!("{:016x}", stable_hash(&value));
        }
        Commands::Info { file } => {
            show_info(file)?;
        }
        Commands::Example { output } => {
            create_examples(output)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_value(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let json: serde_json::Value = serde_json::from_str(&content)
        .wrap_err_with(|| format!("Invalid JSON in {}", path.display()))?;
    Ok(Value::from_json(&json)?)
}

fn compare_files(a: &Path, b: &Path) -> Result<ExitCode> {
    let left = load_value(a)?;
    let right = load_value(b)?;

    match diff_path(&left, &right, "$") {
        None => {
            println!("equal (hash {:016x})", stable_hash(&left));
            Ok(ExitCode::SUCCESS)
        }
        Some(difference) => {
            println!("unequal at {}", difference);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// First diverging path between two value trees, in dot/bracket notation.
/// `None` when the trees are structurally equal.
fn diff_path(a: &Value, b: &Value, path: &str) -> Option<String> {
    match (a, b) {
        (Value::Composite(left), Value::Composite(right)) => {
            for field in left {
                match b.field(&field.name) {
                    None => {
                        return Some(format!("{}.{}: missing on right side", path, field.name))
                    }
                    Some(other) => {
                        let child_path = format!("{}.{}", path, field.name);
                        if let Some(difference) = diff_path(&field.value, other, &child_path) {
                            return Some(difference);
                        }
                    }
                }
            }
            for field in right {
                if a.field(&field.name).is_none() {
                    return Some(format!("{}.{}: missing on left side", path, field.name));
                }
            }
            None
        }
        (Value::Sequence(left), Value::Sequence(right)) => {
            if left.len() != right.len() {
                return Some(format!(
                    "{}: length {} vs {}",
                    path,
                    left.len(),
                    right.len()
                ));
            }
            for (index, (x, y)) in left.iter().zip(right.iter()).enumerate() {
                let child_path = format!("{}[{}]", path, index);
                if let Some(difference) = diff_path(x, y, &child_path) {
                    return Some(difference);
                }
            }
            None
        }
        _ => {
            if structural_eq(a, b) {
                None
            } else {
                Some(format!(
                    "{}: {} != {}",
                    path,
                    render_scalar(a),
                    render_scalar(b)
                ))
            }
        }
    }
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::Composite(_) | Value::Sequence(_) => value.type_name().to_string(),
        scalar => scalar.to_json().to_string(),
    }
}

fn show_info(file: &Path) -> Result<()> {
    let value = load_value(file)?;

    println!("File info for: {}", file.display());
    println!("  root: {}", value.type_name());
    if let Some(names) = kind_of(&value) {
        println!("  kind: {{{}}}", names.join(", "));
    }
    println!("  hash: {:016x}", stable_hash(&value));
    println!("  depth: {}", depth(&value));

    let mut counts = NodeCounts::default();
    count_nodes(&value, &mut counts);
    println!(
        "  nodes: {} total ({} scalars, {} sequences, {} composites)",
        counts.scalars + counts.sequences + counts.composites,
        counts.scalars,
        counts.sequences,
        counts.composites
    );

    Ok(())
}

#[derive(Default)]
struct NodeCounts {
    scalars: usize,
    sequences: usize,
    composites: usize,
}

fn count_nodes(value: &Value, counts: &mut NodeCounts) {
    match value {
        Value::Sequence(elements) => {
            counts.sequences += 1;
            for element in elements {
                count_nodes(element, counts);
            }
        }
        Value::Composite(fields) => {
            counts.composites += 1;
            for field in fields {
                count_nodes(&field.value, counts);
            }
        }
        _ => counts.scalars += 1,
    }
}

fn depth(value: &Value) -> usize {
    match value {
        Value::Sequence(elements) => {
            1 + elements.iter().map(depth).max().unwrap_or(0)
        }
        Value::Composite(fields) => {
            1 + fields.iter().map(|f| depth(&f.value)).max().unwrap_or(0)
        }
        _ => 1,
    }
}

fn create_examples(output: &Path) -> Result<()> {
    fs::create_dir_all(output)?;

    let vehicle = serde_json::json!({
        "model": "mod",
        "color": "red",
        "wheel": { "tread": "studded", "brand": "goodyear" },
        "engine": { "name": "punto", "year": 1990, "power": "550" }
    });

    let mut variant = vehicle.clone();
    variant["wheel"]["brand"] = serde_json::Value::from("goodyears");

    let vehicle_path = output.join("vehicle.json");
    let variant_path = output.join("vehicle-variant.json");
    fs::write(&vehicle_path, serde_json::to_string_pretty(&vehicle)?)?;
    fs::write(&variant_path, serde_json::to_string_pretty(&variant)?)?;

    println!("Created example files:");
    println!("  {}", vehicle_path.display());
    println!("  {}", variant_path.display());
    println!();
    println!("Try: veq compare {} {}", vehicle_path.display(), variant_path.display());

    Ok(())
}
