use std::io::{self, BufRead, Write};
use std::process::exit;
use std::time::Instant;

use structopt::StructOpt;
use typed_arena::Arena;

use permuterm_tools::alphabet::normalize;
use permuterm_tools::dictionary::{Dictionary, FileFormat};
use permuterm_tools::permuterm::{PermutermIndex, QueryResult};

/// Index a word list and answer exact and wildcard queries against it.
#[derive(StructOpt)]
struct Cli {
    /// The path to the word list to index
    #[structopt(parse(from_os_str))]
    path: std::path::PathBuf,
    /// One-shot query; without it, queries are read from stdin
    query: Option<String>,
}

fn main() {
    let args = Cli::from_args();
    let path = args.path.to_string_lossy();

    let dict = match Dictionary::from_file(&path, FileFormat::builder().build()) {
        Ok(dict) => dict,
        Err(_) => {
            eprintln!("File open error: {}", path);
            exit(1);
        }
    };

    let arena = Arena::new();
    let start = Instant::now();
    let (index, rejected) = PermutermIndex::build(&dict, &arena);
    println!(
        "Indexed {} words ({} rejected) in {}s",
        dict.len() - rejected,
        rejected,
        start.elapsed().as_millis() as f64 / 1000.0
    );

    match args.query {
        Some(query) => run_query(&index, &query),
        None => repl(&index),
    }
}

fn repl(index: &PermutermIndex) {
    let stdin = io::stdin();

    prompt();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let query = line.trim();
        if !query.is_empty() {
            run_query(index, query);
        }
        prompt();
    }
}

fn prompt() {
    print!("\nQuery: ");
    let _ = io::stdout().flush();
}

fn run_query(index: &PermutermIndex, raw: &str) {
    let query = normalize(raw);
    match index.query(&query) {
        QueryResult::Exact(Some(entry)) => println!("[{}] found!", entry),
        QueryResult::Exact(None) => println!("[{}] not found!", query),
        QueryResult::Matches(entries) => {
            for entry in entries {
                println!("{}", entry);
            }
        }
    }
}
