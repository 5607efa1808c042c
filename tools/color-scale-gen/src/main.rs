//! Color scale generator CLI
//!
//! The dataset is the `@radix-ui/colors` export object dumped to JSON:
//!
//! ```text
//! node -p 'JSON.stringify(require("@radix-ui/colors"))' > colors.json
//! color-scale-gen generate --dataset colors.json > default_colors.rs
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use color_scale_gen::GenerateOptions;

#[derive(Parser)]
#[command(name = "color-scale-gen")]
#[command(about = "Generate default color scale declarations from a palette dataset", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Palette dataset (JSON)
    #[arg(short, long)]
    dataset: PathBuf,

    /// Handlebars template replacing the built-in declaration template
    #[arg(short, long)]
    template: Option<PathBuf>,
}

impl From<InputArgs> for GenerateOptions {
    fn from(args: InputArgs) -> Self {
        Self {
            dataset: args.dataset,
            template: args.template,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate declarations (to stdout unless --output is given)
    Generate {
        #[command(flatten)]
        input: InputArgs,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a previously generated file is up to date
    Check {
        #[command(flatten)]
        input: InputArgs,

        /// Generated file to compare against
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the generated source
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input, output } => {
            let options = GenerateOptions::from(input);
            match output {
                Some(path) => color_scale_gen::write_output(&options, &path)?,
                None => {
                    let generated = color_scale_gen::generate(&options)?;
                    std::io::stdout().lock().write_all(generated.as_bytes())?;
                }
            }
        }
        Commands::Check { input, output } => {
            let options = GenerateOptions::from(input);
            if !color_scale_gen::check_output(&options, &output)? {
                anyhow::bail!(
                    "{} is out of sync. Run 'color-scale-gen generate' to regenerate.",
                    output.display()
                );
            }
        }
    }

    Ok(())
}
