//! corsite CLI - course site generation tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use corsite::{parse_str, SiteBuilder};

#[derive(Parser)]
#[command(name = "corsite")]
#[command(version)]
#[command(about = "Generate a static HTML course site from one markdown file", long_about = None)]
struct Cli {
    /// Input course markdown file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the site (home page + one page per module)
    Build {
        /// Input course markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Parse the document and report its structure without writing files
    Check {
        /// Input course markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Dump the parsed course as JSON
    Info {
        /// Input course markdown file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Build { input, output }) => cmd_build(&input, output.as_deref()),
        Some(Commands::Check { input }) => cmd_check(&input),
        Some(Commands::Info { input, compact }) => cmd_info(&input, compact),
        None => {
            if let Some(input) = cli.input {
                cmd_build(&input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: corsite <FILE> [OUTPUT]".yellow());
                println!("       corsite --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_build(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_site", stem))
    });

    let pb = ProgressBar::new(2);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    pb.set_message("Parsing course...");
    let markdown = fs::read_to_string(input)?;
    let course = parse_str(&markdown)?;
    pb.inc(1);

    pb.set_message("Rendering pages...");
    let manifest = SiteBuilder::new(&out_dir).build_course(&course)?;
    pb.inc(1);

    pb.finish_with_message("Done!");

    println!(
        "\n{} {} HTML files in {}:",
        "Generated".green().bold(),
        manifest.file_count(),
        out_dir.display()
    );
    for (idx, name) in manifest.files.iter().enumerate() {
        let connector = if idx + 1 == manifest.file_count() {
            "└─"
        } else {
            "├─"
        };
        println!("  {} {}", connector.dimmed(), name);
    }

    Ok(())
}

fn cmd_check(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = fs::read_to_string(input)?;
    let course = parse_str(&markdown)?;

    println!("{} {}", "Course:".green().bold(), course.title);
    println!("{} {}", "Modules:".green().bold(), course.module_count());
    for module in &course.modules {
        println!(
            "  {} {:02} - {}",
            "├─".dimmed(),
            module.number,
            module.title
        );
    }

    let mark = |present: bool| if present { "yes".green() } else { "no".dimmed() };
    println!("{} {}", "Labs:".green().bold(), mark(course.has_labs()));
    println!(
        "{} {}",
        "Bibliografia:".green().bold(),
        mark(course.has_bibliography())
    );
    println!(
        "{} {}",
        "Nota home:".green().bold(),
        mark(course.has_home_note())
    );

    Ok(())
}

fn cmd_info(input: &Path, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    let markdown = fs::read_to_string(input)?;
    let course = parse_str(&markdown)?;

    let json = if compact {
        serde_json::to_string(&course)?
    } else {
        serde_json::to_string_pretty(&course)?
    };
    println!("{}", json);

    Ok(())
}
