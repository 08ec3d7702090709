use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use image_roulette::scan;
use image_roulette::source::fs::{FsAssetProbe, FsCaptionSource, FsManifestSource};
use image_roulette::{FolderChoice, Selector, SelectorConfig, SelectorObserver};

#[derive(Parser)]
#[command(name = "image-roulette", version, about = "Random image + caption generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a manifest and caption file, then generate random picks
    Generate {
        /// Path to the image manifest JSON
        #[arg(long, default_value = "images-manifest.json")]
        manifest: PathBuf,
        /// Path to the caption JSON
        #[arg(long, default_value = "captions.json")]
        captions: PathBuf,
        /// Root directory image paths are resolved against
        /// (defaults to the manifest's directory)
        #[arg(long)]
        root: Option<PathBuf>,
        /// Folder to select before generating
        #[arg(long, conflicts_with = "random")]
        folder: Option<String>,
        /// Select a random folder before generating
        #[arg(long)]
        random: bool,
        /// Random seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
        /// Number of picks to generate
        #[arg(long, default_value_t = 1)]
        count: u32,
    },
    /// Build a manifest by scanning a directory of image folders
    Scan {
        /// Directory whose subdirectories become manifest folders
        #[arg(long)]
        root: PathBuf,
        /// Where to write the manifest JSON
        #[arg(long, default_value = "images-manifest.json")]
        output: PathBuf,
    },
}

/// Prints selector notifications the way the browser UI renders them.
struct ConsoleObserver;

impl SelectorObserver for ConsoleObserver {
    fn on_folders_changed(&self, active: &str) {
        println!("📂 Selected: {active}");
    }

    fn on_pick_started(&self) {
        println!("🎲 Loading image...");
    }

    fn on_pick_succeeded(&self, image_path: &str, caption: &str, folder: &str) {
        println!("✅ Image loaded: {image_path}");
        println!("💬 Caption: {caption}");
        println!("   Source: {folder} folder");
    }

    fn on_pick_failed(&self, message: &str) {
        println!("❌ {message}");
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("❌ {message}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Generate {
            manifest,
            captions,
            root,
            folder,
            random,
            seed,
            count,
        } => {
            let root = root
                .or_else(|| manifest.parent().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));

            let config = SelectorConfig {
                default_folder: None,
                random_candidates: None,
                seed,
            };

            let mut selector = Selector::load(
                config,
                &FsManifestSource::new(&manifest),
                &FsCaptionSource::new(&captions),
                Box::new(ConsoleObserver),
            )
            .await
            .map_err(|e| e.to_string())?;

            println!(
                "📁 Manifest: {} folders, {} images",
                selector.manifest().len(),
                selector.manifest().image_count()
            );
            println!("💬 Captions: {}", selector.captions().len());

            let choice = if random {
                Some(FolderChoice::Random)
            } else {
                folder.map(FolderChoice::Named)
            };
            if let Some(choice) = choice {
                selector.select_folder(choice).map_err(|e| e.to_string())?;
            }

            let probe = FsAssetProbe::new(root);
            for _ in 0..count {
                // Failed picks are already reported by the observer
                selector.generate(&probe).await;
            }
            Ok(())
        }
        Command::Scan { root, output } => {
            let manifest = scan::build_manifest(&root).map_err(|e| e.to_string())?;
            scan::write_manifest(&manifest, &output).map_err(|e| e.to_string())?;
            println!(
                "✅ Wrote {}: {} folders, {} images",
                output.display(),
                manifest.len(),
                manifest.image_count()
            );
            Ok(())
        }
    }
}
