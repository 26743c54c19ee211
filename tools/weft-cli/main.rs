use ahash::{AHashMap, AHashSet};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;
use weft::flow::{graph, LayoutDirection};
use weft::prelude::*;

/// Inspect pipeline graphs and UI-builder templates from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Optional flow-editor configuration JSON
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a pipeline JSON file into positioned flow elements
    Graph {
        /// Path to the pipeline JSON file (`{"name": .., "manifest": {"tasks": ..}}`)
        pipeline_path: String,
        /// Optional path to a JSON array of triggers
        #[arg(short, long)]
        triggers: Option<String>,
        /// Reject dependencies on tasks missing from the manifest
        #[arg(long)]
        strict: bool,
    },
    /// Instantiate a template and apply option changes to it
    Template {
        name: String,
        /// Field changes, written as `field=value`
        #[arg(short, long = "set", value_name = "FIELD=VALUE")]
        changes: Vec<String>,
    },
    /// List the registered templates
    Templates,
    /// Write a binary snapshot of a pipeline graph, or inspect an existing one
    Snapshot {
        /// Pipeline JSON file to snapshot
        pipeline_path: Option<String>,
        #[arg(short, long, default_value = "snapshot.bin")]
        output: String,
        /// Read the snapshot at `--output` instead of writing it
        #[arg(long)]
        inspect: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("\nError: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> std::result::Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => FlowEditorConfig::from_json(&fs::read_to_string(path)?)?,
        None => FlowEditorConfig::default(),
    };

    match cli.command {
        Command::Graph {
            pipeline_path,
            triggers,
            strict,
        } => {
            let elements = load_graph(&pipeline_path, triggers.as_deref(), strict, config)?;
            println!("{}", serde_json::to_string_pretty(elements.as_ref())?);
        }
        Command::Template { name, changes } => run_template(&name, &changes)?,
        Command::Templates => {
            let registry = TemplateRegistry::with_defaults()?;
            for name in registry.names() {
                println!("{}", name);
            }
        }
        Command::Snapshot {
            pipeline_path,
            output,
            inspect,
        } => {
            if inspect {
                let snapshot = Snapshot::from_file(&output)?;
                println!(
                    "{}: {} nodes, {} edges",
                    output,
                    graph::nodes(&snapshot.elements).count(),
                    graph::edges(&snapshot.elements).count()
                );
            } else {
                let path = pipeline_path.ok_or("a pipeline path is required to write a snapshot")?;
                let elements = load_graph(&path, None, false, config)?;
                Snapshot::new(elements.as_ref().clone(), None).save(&output)?;
                println!("Snapshot written to '{}'", output);
            }
        }
    }
    Ok(())
}

fn load_graph(
    pipeline_path: &str,
    triggers_path: Option<&str>,
    strict: bool,
    mut config: FlowEditorConfig,
) -> std::result::Result<std::sync::Arc<Vec<FlowElement>>, Box<dyn Error>> {
    let start = Instant::now();
    let pipeline = PipelineData::from_json(&fs::read_to_string(pipeline_path)?)?;
    let triggers: Option<Vec<TriggerData>> = match triggers_path {
        Some(path) => Some(serde_json::from_str(&fs::read_to_string(path)?)?),
        None => None,
    };
    config.strict_manifest |= strict;

    let mut editor = FlowEditor::builder(rank_layout)
        .with_config(config)
        .with_initial_elements(Vec::new())
        .build();
    editor.select_pipeline(Some(pipeline), triggers)?;
    eprintln!("Graph built in {:.2?}", start.elapsed());
    Ok(editor.elements())
}

fn run_template(name: &str, changes: &[String]) -> std::result::Result<(), Box<dyn Error>> {
    let registry = TemplateRegistry::with_defaults()?;
    let template = registry.get(name)?;

    let root = template.component().clone();
    let mut latest = root.clone();
    let mut set = |next: Element| latest = next;
    let mut options = template.options(&root, &mut set)?;
    for change in changes {
        let (field, value) = change
            .split_once('=')
            .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", change))?;
        let value = match value {
            "true" => OptionValue::Flag(true),
            "false" => OptionValue::Flag(false),
            text => OptionValue::from(text),
        };
        options.change(field, value)?;
    }
    drop(options);

    println!("{}", serde_json::to_string_pretty(&latest)?);
    Ok(())
}

/// Places each node on the rank of its longest dependency chain.
fn rank_layout(
    mut elements: Vec<FlowElement>,
    direction: LayoutDirection,
    node_width: f64,
    node_height: f64,
) -> Vec<FlowElement> {
    let ranks: AHashMap<String, usize> = ranks(&elements)
        .into_iter()
        .map(|(id, rank)| (id.to_string(), rank))
        .collect();
    let mut per_rank: AHashMap<usize, usize> = AHashMap::new();
    for element in &mut elements {
        if let FlowElement::Node(node) = element {
            let rank = ranks.get(&node.id).copied().unwrap_or(0);
            let slot = per_rank.entry(rank).or_default();
            let (along, across) = (rank as f64, *slot as f64);
            *slot += 1;
            let (x, y) = match direction {
                LayoutDirection::TopBottom => (across * node_width * 1.5, along * node_height * 3.0),
                LayoutDirection::BottomTop => (across * node_width * 1.5, -along * node_height * 3.0),
                LayoutDirection::LeftRight => (along * node_width * 1.5, across * node_height * 3.0),
                LayoutDirection::RightLeft => (-along * node_width * 1.5, across * node_height * 3.0),
            };
            node.position = Position::new(x, y);
        }
    }
    elements
}

/// Longest dependency chain for every node, each node ranked once.
fn ranks(elements: &[FlowElement]) -> AHashMap<&str, usize> {
    let mut ranks = AHashMap::new();
    let mut visiting = AHashSet::new();
    for node in graph::nodes(elements) {
        rank_of(elements, &node.id, &mut ranks, &mut visiting);
    }
    ranks
}

fn rank_of<'a>(
    elements: &'a [FlowElement],
    id: &'a str,
    ranks: &mut AHashMap<&'a str, usize>,
    visiting: &mut AHashSet<&'a str>,
) -> usize {
    if let Some(&rank) = ranks.get(id) {
        return rank;
    }
    // Met again while its own chain is being walked: the edge closes a cycle.
    if !visiting.insert(id) {
        return 0;
    }
    let mut rank = 0;
    for edge in graph::incoming(elements, id) {
        rank = rank.max(1 + rank_of(elements, &edge.source, ranks, visiting));
    }
    visiting.remove(id);
    ranks.insert(id, rank);
    rank
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft::flow::TaskNodeData;

    /// Each task depends on the previous one through two parallel edges and on the one
    /// before that, so walking every path would take exponential time.
    fn ladder(len: usize) -> Vec<FlowElement> {
        let id = |i: usize| format!("task {}", i);
        let mut elements: Vec<FlowElement> = (0..len)
            .map(|i| FlowElement::Node(FlowNode::task(id(i), TaskNodeData::named(id(i)))))
            .collect();
        for i in 1..len {
            elements.push(FlowElement::Edge(FlowEdge::between(id(i - 1), id(i))));
            elements.push(FlowElement::Edge(FlowEdge::between(id(i - 1), id(i))));
            if i > 1 {
                elements.push(FlowElement::Edge(FlowEdge::between(id(i - 2), id(i))));
            }
        }
        elements
    }

    #[test]
    fn ranks_long_ladders_once_per_node() {
        let elements = ladder(60);
        let ranks = ranks(&elements);
        assert_eq!(ranks.len(), 60);
        assert_eq!(ranks["task 0"], 0);
        assert_eq!(ranks["task 59"], 59);

        let laid_out = rank_layout(elements, LayoutDirection::TopBottom, 100.0, 10.0);
        let last = laid_out[59].as_node().unwrap();
        assert_eq!(last.position, Position::new(0.0, 59.0 * 30.0));
    }

    #[test]
    fn cycles_terminate() {
        let elements = vec![
            FlowElement::Node(FlowNode::task("a", TaskNodeData::named("a"))),
            FlowElement::Node(FlowNode::task("b", TaskNodeData::named("b"))),
            FlowElement::Edge(FlowEdge::between("a", "b")),
            FlowElement::Edge(FlowEdge::between("b", "a")),
        ];
        let ranks = ranks(&elements);
        assert_eq!(ranks.len(), 2);
        assert!(ranks.values().all(|&rank| rank <= 2));
    }
}
