// Cheonjiin Simulator CLI
// Feeds key-press events through the composition engine and shows the
// resulting keystroke stream, for trying out and validating layouts.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::debug;

use cheonjiin_core::{Action, ActionEmitter, CompositionEngine, Key, KeySink, Layout, TextBuffer};

/// Three-stroke composition engine simulator
#[derive(Parser, Debug)]
#[command(name = "cheonjiin")]
#[command(about = "Simulate the three-stroke composition engine on a key sequence", long_about = None)]
struct Args {
    /// TOML layout file (defaults to the built-in layout)
    #[arg(short, long, value_name = "LAYOUT")]
    layout: Option<PathBuf>,

    /// Extra consonant-trigger keys, by name (can be used multiple times)
    #[arg(short = 'a', long = "alias", value_name = "KEY")]
    aliases: Vec<String>,

    /// Validate the layout and exit
    #[arg(long)]
    check_layout: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Key names to press in order; reads stdin when empty
    #[arg(value_name = "KEY")]
    keys: Vec<String>,
}

fn load_layout(args: &Args) -> Result<Layout> {
    let mut layout = match &args.layout {
        Some(path) => Layout::from_file(path)
            .with_context(|| format!("failed to load layout {}", path.display()))?,
        None => Layout::default(),
    };
    for alias in &args.aliases {
        layout
            .add_consonant_alias(alias)
            .with_context(|| format!("invalid consonant alias {}", alias))?;
    }
    Ok(layout)
}

fn run(args: Args) -> Result<()> {
    let layout = load_layout(&args)?;

    if args.check_layout {
        println!("layout ok: {} consonant keys", layout.consonants.len());
        return Ok(());
    }

    let names: Vec<String> = if args.keys.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("failed to read key names from stdin")?;
        input.split_whitespace().map(str::to_string).collect()
    } else {
        args.keys.clone()
    };

    if names.is_empty() {
        bail!("no key names given");
    }

    let backspace = layout.backspace;
    let emitter = ActionEmitter::new(backspace);
    let mut engine = CompositionEngine::new(layout);
    let mut buffer = TextBuffer::new(backspace);

    for name in &names {
        let key: Key = name
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))
            .with_context(|| format!("cannot press {}", name))?;

        let result = engine.process(key, Action::Press);
        debug!("{} -> {:?}", key, result);

        let actions: Vec<String> = result.actions.iter().map(|a| a.to_string()).collect();
        emitter.emit(&result.actions, &mut buffer);
        if result.pass_through {
            buffer.tap(key);
        }

        println!(
            "{:<12} {} [{}]  => \"{}\"",
            key.to_string(),
            if result.pass_through {
                "pass    "
            } else {
                "suppress"
            },
            actions.join(", "),
            buffer.text()
        );
    }

    println!("final stream: \"{}\"", buffer.text());
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    run(args)
}
