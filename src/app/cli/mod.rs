//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::app::api::{self, GenerateOptions};
use crate::domain::{
    AppError, DEFAULT_LAYER_NAME, DEFAULT_REGION, DEFAULT_STACK_NAME, DEFAULT_TARGET_DIR,
    GenerationRequest,
};

#[derive(Parser)]
#[command(name = "layla")]
#[command(version)]
#[command(about = "Initialize a SAM app to manage a custom Lambda layer", long_about = None)]
struct Cli {
    /// The directory in which to initialize the app
    #[arg(short = 'd', long = "directory", default_value = DEFAULT_TARGET_DIR)]
    target_dir: PathBuf,
    /// The name of the layer (used for AWS resource names)
    #[arg(short = 'n', long, default_value = DEFAULT_LAYER_NAME)]
    layer_name: String,
    /// The name of the AWS stack
    #[arg(short = 's', long, default_value = DEFAULT_STACK_NAME)]
    stack_name: String,
    /// The libraries to be included within the layer
    #[arg(short = 'c', long, num_args = 1..)]
    contents: Vec<String>,
    /// The AWS region
    #[arg(short = 'r', long, default_value = DEFAULT_REGION)]
    region_name: String,
    /// The S3 bucket in which to store layer artifacts
    #[arg(short = 'b', long)]
    bucket: Option<String>,
    /// Print the generated files instead of writing them
    #[arg(long)]
    dry_run: bool,
    /// Fail when no bucket is given instead of writing "None"
    #[arg(long)]
    require_bucket: bool,
}

impl Cli {
    fn request(&self) -> GenerationRequest {
        GenerationRequest {
            layer_name: self.layer_name.clone(),
            contents: self.contents.clone(),
            stack_name: self.stack_name.clone(),
            storage_bucket: self.bucket.clone(),
            region_name: self.region_name.clone(),
            target_dir: self.target_dir.clone(),
        }
    }

    fn options(&self) -> GenerateOptions {
        GenerateOptions { require_bucket: self.require_bucket }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result =
        if cli.dry_run { run_preview(&cli.request(), cli.options()) } else { run_generate(&cli) };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(cli: &Cli) -> Result<(), AppError> {
    let outcome = api::generate_with(&cli.request(), cli.options())?;
    println!("✅ Initialized layer app at {}", outcome.root.display());
    for file in &outcome.files {
        println!("  {}", file.display());
    }
    Ok(())
}

fn run_preview(request: &GenerationRequest, options: GenerateOptions) -> Result<(), AppError> {
    for artifact in api::preview(request, options)? {
        println!("==> {} <==", artifact.relative_path().display());
        println!("{}", artifact.content);
    }
    Ok(())
}
