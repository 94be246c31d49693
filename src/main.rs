// Mon Feb 02 2026 - Alex

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use vulkan_binding_generator::{
    config::Config,
    generate::{EnumerationGenerator, StructureGenerator},
    layout::WordSize,
    output::{SourceWriter, Template},
    parser::{Declaration, HeaderParser},
    types::TypeMapper,
};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Vulkan header binding generator", long_about = None)]
struct Args {
    #[arg(short, long)]
    input: PathBuf,

    #[arg(short, long, default_value = "generated")]
    output: PathBuf,

    #[arg(long, default_value = "vulkan.bindings")]
    package: String,

    #[arg(long, default_value = "8")]
    word_size: usize,

    /// Handle type to pre-register (repeatable).
    #[arg(long)]
    handle: Vec<String>,

    /// Overwrite existing generated files.
    #[arg(long)]
    force: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    if let Err(error) = run(&args) {
        eprintln!("{} {:#}", "[!]".red(), error);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    println!("{}", "Vulkan Binding Generator".cyan().bold());
    println!("{}", "=".repeat(50).cyan());
    println!();

    let mut config = Config::default();
    config.word_size = args.word_size;
    config.output_dir = args.output.clone();
    config.package = args.package.clone();
    config.overwrite = args.force;
    config.handles = args.handle.clone();

    println!("{} Loading header: {}", "[*]".blue(), args.input.display());
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let word = WordSize::new(config.word_size)?;
    let mut mapper = TypeMapper::with_defaults();
    for handle in &config.handles {
        mapper.add_handle(handle)?;
    }

    let declarations = HeaderParser::parse(&source, config.length_resolver())?;
    println!(
        "{} Parsed {} declarations",
        "[+]".green(),
        declarations.len()
    );
    println!();

    let writer = SourceWriter::new(&config.output_dir).with_overwrite(config.overwrite);
    let structures = StructureGenerator::new(word);

    let mut generated = 0usize;
    let mut skipped = 0usize;

    for declaration in &declarations {
        match declaration {
            Declaration::Enumeration(data) => {
                match EnumerationGenerator::generate(data, &mut mapper) {
                    Ok(arguments) => {
                        let source = Template::enumeration_source(&arguments, &config.package);
                        writer.write(&arguments.class_name, &source)?;
                        println!("{} {}", "[+]".green(), arguments.class_name);
                        generated += 1;
                    }
                    Err(error) => {
                        eprintln!("{} skipping {}: {}", "[!]".yellow(), data.name(), error);
                        skipped += 1;
                    }
                }
            }
            Declaration::Structure(data) => {
                match structures.generate(data, &mut mapper) {
                    Ok(arguments) => {
                        let source = Template::structure_source(&arguments, &config.package);
                        writer.write(&arguments.class_name, &source)?;
                        println!("{} {}", "[+]".green(), arguments.class_name);
                        generated += 1;
                    }
                    Err(error) => {
                        eprintln!("{} skipping {}: {}", "[!]".yellow(), data.name(), error);
                        skipped += 1;
                    }
                }
            }
            Declaration::Alias { existing, alias } => {
                if let Err(error) = mapper.typedef(existing, alias) {
                    eprintln!("{} skipping typedef {}: {}", "[!]".yellow(), alias, error);
                    skipped += 1;
                }
            }
        }
    }

    println!();
    println!(
        "{} Generated {} types into {} ({} skipped)",
        "[+]".green(),
        generated,
        config.output_dir.display(),
        skipped
    );

    if !mapper.flagged_names().is_empty() {
        println!(
            "{} Ambiguous plural field names, review manually: {}",
            "[!]".yellow(),
            mapper.flagged_names().join(", ")
        );
    }

    Ok(())
}
