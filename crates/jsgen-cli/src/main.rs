use anyhow::Result;
use clap::{Parser, Subcommand};
use jsgen_core::Js;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jsgen")]
#[command(about = "jsgen - print JSON-encoded JavaScript IR as JavaScript source")]
#[command(version = "0.1.0")]
#[command(author = "Gianluca Brigandi <gbrigand@gmail.com>")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Print {
        input: PathBuf,

        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, conflicts_with = "indent")]
        tabs: bool,

        #[arg(long, default_value_t = 4)]
        indent: usize,

        #[arg(short, long)]
        verbose: bool,
    },

    Debug {
        input: PathBuf,

        #[arg(short, long)]
        verbose: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_program(path: &Path) -> Result<Vec<Js>> {
    let json = fs::read_to_string(path)?;
    let program = jsgen_core::from_json(&json)?;
    tracing::debug!(path = %path.display(), statements = program.len(), "loaded program");
    Ok(program)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print {
            input,
            output,
            tabs,
            indent,
            verbose,
        } => {
            init_tracing(verbose);
            cmd_print(input, output, tabs, indent, verbose)
        }
        Commands::Debug { input, verbose } => {
            init_tracing(verbose);
            cmd_debug(input, verbose)
        }
    }
}

fn cmd_print(
    input: PathBuf,
    output: Option<PathBuf>,
    tabs: bool,
    indent: usize,
    verbose: bool,
) -> Result<()> {
    use colored::*;
    use jsgen_emit::{Emitter, EmitterConfig, IndentStyle, JsEmitter};
    use std::time::Instant;

    if verbose {
        eprintln!("{}", " jsgen printer".bright_blue().bold());
        eprintln!("{}", "=".repeat(50).bright_blue());
        eprintln!(" Input: {}", input.display());
        if let Some(ref out) = output {
            eprintln!(" Output: {}", out.display());
        }
        eprintln!();
    }

    let start = Instant::now();
    let program = load_program(&input)?;

    if program.is_empty() {
        eprintln!("{}", "  Program is empty".yellow());
    }

    let indent_style = if tabs {
        IndentStyle::Tabs
    } else {
        IndentStyle::Spaces(indent)
    };
    let emitter = JsEmitter::new(EmitterConfig::default().with_indent(indent_style));
    let text = emitter.emit_to_string(&program)?;
    tracing::debug!(
        statements = program.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "printed program"
    );

    if let Some(output_path) = output {
        fs::write(&output_path, &text)?;
        if verbose {
            eprintln!(
                "\n {} Printed {} statement(s)",
                "SUCCESS:".bright_green().bold(),
                program.len()
            );
            eprintln!("   Time: {:.3}s", start.elapsed().as_secs_f64());
            eprintln!("   Output: {}", output_path.display());
        }
    } else {
        print!("{}", text);
    }

    Ok(())
}

fn cmd_debug(input: PathBuf, verbose: bool) -> Result<()> {
    use colored::*;

    let program = load_program(&input)?;

    if program.is_empty() {
        println!("  No statements found");
        return Ok(());
    }

    let total: usize = program.iter().map(|statement| statement.node_count()).sum();
    println!(
        " Found {} statement(s), {} node(s)\n",
        program.len(),
        total
    );

    for (idx, statement) in program.iter().enumerate() {
        println!(
            "{}",
            format!(" Statement {}: {} node(s)", idx, statement.node_count())
                .bright_green()
                .bold()
        );
        if verbose {
            println!("{:#?}", statement);
        } else {
            println!("{:?}", statement);
        }
        println!();
    }

    Ok(())
}
