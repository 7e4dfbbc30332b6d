use std::{collections::HashMap, path::PathBuf};

use clap::{Parser, Subcommand};
use intlgen::{CoverageReport, ResourceCollection, traits::ModelFile};
use intlgen_cli::{Config, coverage, generate::run_generate, resolve};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the Dart localization class from a resource model.
    Generate {
        /// The resource model (JSON) to read
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// The Dart file to write; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (defaults to ./intlgen.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Name of the generated class
        #[arg(long)]
        class_name: Option<String>,
    },

    /// Show which default-locale keys each locale is missing.
    Coverage {
        /// The resource model (JSON) to read
        #[arg(short, long)]
        input: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a key the way the generated class would.
    Resolve {
        /// The resource model (JSON) to read
        #[arg(short, long)]
        input: PathBuf,

        /// The translation key
        #[arg(short, long)]
        key: String,

        /// Locale whose table overrides the default one
        #[arg(short, long)]
        locale: Option<String>,

        /// Placeholder value as name=value (repeatable)
        #[arg(short, long = "arg", value_parser = resolve::parse_placeholder_arg)]
        args: Vec<(String, String)>,
    },
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let args = Args::parse();

    match args.commands {
        Commands::Generate {
            input,
            output,
            config,
            class_name,
        } => {
            let result = Config::load(config.as_deref())
                .map(|c| c.with_overrides(input, output, class_name))
                .and_then(|c| run_generate(&c).map(|generated| (c, generated)));
            match result {
                Ok((config, generated)) => {
                    if let Some(path) = &config.output {
                        println!(
                            "✅ Generated {} with {} accessor(s) to {}",
                            generated.class_name,
                            generated.accessor_count,
                            path.display()
                        );
                        if !generated.missing.is_empty() {
                            println!("⚠️  {} missing translation(s)", generated.missing.len());
                        }
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Coverage { input, json } => {
            let rendered = ResourceCollection::load(&input).and_then(|collection| {
                let report = CoverageReport::from_collection(&collection);
                if json {
                    coverage::render_json(&report)
                } else {
                    Ok(coverage::render_table(&report))
                }
            });
            match rendered {
                Ok(text) => println!("{}", text.trim_end()),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Resolve {
            input,
            key,
            locale,
            args,
        } => {
            let args: HashMap<String, String> = args.into_iter().collect();
            match resolve::run_resolve(&input, &key, locale.as_deref(), &args) {
                Ok(value) => println!("{}", value),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
