use anagram_core::acquire::{DataCache, HttpFetcher};
use anagram_core::config::Config;
use anagram_core::core::search::Hit;
use anagram_core::persistence::export_index;
use anagram_core::{is_phrase_anagram, AnagramEngine};
use clap::{ArgAction, Parser, Subcommand};
use crossterm::style::{style, Stylize};
use env_logger::Builder;
use log::LevelFilter;
use std::collections::BTreeMap;
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;
use std::process;

/// Anagram and hidden-message explorer for a downloaded corpus.
#[derive(Parser, Debug)]
#[command(name = "anagram_probe")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Verbosity level (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    quiet: bool,

    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the data directory from the config
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Download and filter the corpus and word list, then print counts
    Fetch,
    /// List the anagrams of each word
    Anagrams {
        #[arg(required = true)]
        words: Vec<String>,
        /// Print a JSON object instead of text
        #[arg(long)]
        json: bool,
    },
    /// Find a literal keyword in the corpus and show its context
    Search {
        keyword: String,
        /// Chars of context on each side
        #[arg(short, long)]
        width: Option<usize>,
    },
    /// Check whether two phrases use exactly the same letters
    Check { first: String, second: String },
    /// Words that can be spelled from the letters of a phrase
    Within {
        phrase: String,
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },
    /// Show the largest anagram groups
    Groups {
        #[arg(short, long, default_value_t = 10)]
        top: usize,
    },
    /// Write the anagram index to a JSON file
    Export { path: PathBuf },
    /// Interactive session: `?word` for anagrams, `/keyword` to search
    Explore,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.quiet {
        LevelFilter::Error
    } else {
        match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    };
    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> anagram_core::Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }

    let load = || -> anagram_core::Result<(DataCache, AnagramEngine)> {
        let cache = DataCache::open(&config.data_dir)?;
        let engine = AnagramEngine::acquire(&config, &cache, &HttpFetcher::new());
        Ok((cache, engine))
    };

    match args.command {
        Command::Check { first, second } => {
            let verdict = if is_phrase_anagram(&first, &second) { "ARE" } else { "are NOT" };
            println!("'{first}' and '{second}' {verdict} anagrams of each other");
        }
        Command::Fetch => {
            let (cache, engine) = load()?;
            let stats = engine.stats();
            println!("Data directory:    {}", cache.dir().display());
            println!("Corpus length:     {} chars", stats.corpus_chars);
            println!("Corpus words:      {}", stats.corpus_words);
            println!("Dictionary words:  {}", stats.dictionary_words);
            println!("Signatures:        {}", stats.signatures);
        }
        Command::Anagrams { words, json } => {
            let (_, engine) = load()?;
            if json {
                let found: BTreeMap<&str, Vec<&str>> = words
                    .iter()
                    .map(|w| (w.as_str(), engine.anagrams_of(w)))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&found)?);
            } else {
                for word in &words {
                    print_anagrams(&engine, word);
                }
            }
        }
        Command::Search { keyword, width } => {
            let (_, engine) = load()?;
            let width = width.unwrap_or(config.context_width);
            let hits = engine.hits(&keyword, width);
            println!("{} occurrence(s) of '{}'", hits.len(), keyword);
            for hit in &hits {
                print_hit(hit);
            }
        }
        Command::Within { phrase, limit } => {
            let (_, engine) = load()?;
            let found = engine.words_within(&phrase);
            println!("{} word(s) fit inside '{}'", found.len(), phrase);
            for word in found.iter().take(limit) {
                println!("  {word}");
            }
        }
        Command::Groups { top } => {
            let (_, engine) = load()?;
            for (signature, words) in engine.largest_groups(top) {
                println!("{:>3}  {:<16} {}", words.len(), signature, words.join(", "));
            }
        }
        Command::Export { path } => {
            let (_, engine) = load()?;
            export_index(engine.index(), &path)?;
            println!("Index written to '{}'", path.display());
        }
        Command::Explore => {
            let (_, engine) = load()?;
            explore(&engine, config.context_width);
        }
    }
    Ok(())
}

fn print_anagrams(engine: &AnagramEngine, word: &str) {
    let anagrams = engine.anagrams_of(word);
    if anagrams.is_empty() {
        println!("{word}: no anagrams found");
    } else {
        println!("{word}: {}", anagrams.join(", "));
    }
}

fn print_hit(hit: &Hit<'_>) {
    println!(
        "  @{:<9} ...{}{}{}...",
        hit.offset,
        one_line(hit.before),
        style(one_line(hit.matched)).bold().yellow(),
        one_line(hit.after)
    );
}

fn one_line(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect()
}

fn explore(engine: &AnagramEngine, width: usize) {
    let stats = engine.stats();
    println!(
        "Loaded {} words under {} signatures.",
        engine.words().len(),
        stats.signatures
    );
    println!("Type '?word' for anagrams, '/keyword' to search, 'exit' to quit.");
    println!("---------------------------------------------------------------");

    loop {
        print!("\n> ");
        if stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match stdin().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let cmd = input.trim_end();

        match cmd {
            "exit" => break,
            "" => {}
            s if s.starts_with('?') => {
                for word in s[1..].split_whitespace() {
                    print_anagrams(engine, word);
                }
            }
            s if s.starts_with('/') && s.len() > 1 => {
                let hits = engine.hits(&s[1..], width);
                println!("{} occurrence(s)", hits.len());
                for hit in &hits {
                    print_hit(hit);
                }
            }
            _ => println!("Unknown command. Use '?word', '/keyword' or 'exit'."),
        }
    }
}
