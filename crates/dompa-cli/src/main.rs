use clap::{Parser, Subcommand};
use dompa_parser::{Node, ParseOptions};
use dompa_serializer::{serialize, to_json_string, Html};
use std::path::Path;

#[derive(Parser)]
#[command(name = "dompa")]
#[command(about = "dompa: permissive markup parser and serializer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a markup file and print it back as markup
    Html {
        /// Input markup file
        path: String,

        /// Extra tag name to treat as void (repeatable)
        #[arg(long = "void", value_name = "NAME")]
        void: Vec<String>,
    },

    /// Parse a markup file and print the node tree as JSON
    Json {
        /// Input markup file
        path: String,

        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,

        /// Extra tag name to treat as void (repeatable)
        #[arg(long = "void", value_name = "NAME")]
        void: Vec<String>,
    },

    /// Check a markup file for unmatched close tags without printing output
    Check {
        /// Input markup file
        path: String,

        /// Extra tag name to treat as void (repeatable)
        #[arg(long = "void", value_name = "NAME")]
        void: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Html { path, void } => cmd_html(&path, &void),
        Command::Json { path, pretty, void } => cmd_json(&path, pretty, &void),
        Command::Check { path, void } => cmd_check(&path, &void),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn options(void: &[String]) -> ParseOptions {
    void.iter()
        .fold(ParseOptions::new(), |options, name| options.with_void_element(name))
}

fn parse_file(path: &str, void: &[String]) -> Vec<Node> {
    let source = read_source(path);

    match dompa_parser::Parser::with_options(&source, options(void)).parse_nodes() {
        Ok(nodes) => nodes,
        Err(e) => {
            eprintln!("Parse error in {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_html(path: &str, void: &[String]) {
    let nodes = parse_file(path, void);
    println!("{}", serialize(&nodes, Html));
}

fn cmd_json(path: &str, pretty: bool, void: &[String]) {
    let nodes = parse_file(path, void);

    match to_json_string(&nodes, pretty) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Serialize error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_check(path: &str, void: &[String]) {
    let nodes = parse_file(path, void);
    eprintln!("OK: {path} ({} top-level nodes)", nodes.len());
}
