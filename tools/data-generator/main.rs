use clap::Parser;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use weft::flow::{Manifest, PipelineData, TaskManifest, Trigger};

const TASK_TYPES: &[&str] = &["http", "transform", "notify", "store"];
const TRIGGERS: &[&str] = &["completed", "failed", "skipped"];

/// A CLI tool to generate random pipeline manifests for the weft CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_pipeline.json")]
    output: String,

    /// Number of tasks in the pipeline
    #[arg(long, default_value_t = 12)]
    tasks: usize,

    /// The maximum number of dependencies per task
    #[arg(long, default_value_t = 3)]
    max_deps: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.tasks == 0 {
        eprintln!("Error: --tasks must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating a pipeline with {} tasks (up to {} dependencies each)...",
        cli.tasks, cli.max_deps
    );

    let manifest = generate_manifest(&mut rng, cli.tasks, cli.max_deps);
    let pipeline = PipelineData::new("generated", manifest);

    let json_output = serde_json::to_string_pretty(&pipeline)?;
    fs::write(&cli.output, json_output)?;

    println!("Successfully generated and saved pipeline to '{}'", cli.output);
    Ok(())
}

/// Tasks only depend on earlier tasks, so the result is always acyclic.
fn generate_manifest<R: Rng>(rng: &mut R, tasks: usize, max_deps: usize) -> Manifest {
    let mut manifest = Manifest::default();
    for index in 0..tasks {
        let task_type = TASK_TYPES.choose(rng).copied().unwrap_or("http");
        let mut task = TaskManifest {
            task_type: task_type.to_string(),
            ..TaskManifest::default()
        };
        task.body.insert(
            "url".to_string(),
            weft::flow::RawFieldValue::Text(format!("https://example.com/{}", index)),
        );

        if index > 0 {
            let deps = rng.random_range(0..=max_deps.min(index));
            for _ in 0..deps {
                let source = format!("task{}", rng.random_range(0..index));
                let trigger = TRIGGERS.choose(rng).copied().unwrap_or("completed");
                task = task.after(source, vec![Trigger::from(trigger)]);
            }
        }
        manifest = manifest.with_task(format!("task{}", index), task);
    }
    manifest
}
