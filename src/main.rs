use backplate::batch::{BatchContext, SourceBlob, run_batch};
use backplate::output::{ConsoleNotifier, ConsoleProgress, print_summary, print_targets};
use backplate::targets::OperatingMode;
use backplate::{archive, render};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "backplate")]
#[command(about = "Batch renderer for backdrop artwork")]
#[command(long_about = "\
Batch renderer for backdrop artwork

Takes full-size backdrop images and renders each into the four fixed display
frames, then packages everything into a single zip archive:

  240x135   png    thumbnail
  800x450   png    card
  1280x480  png    hero banner (gradient + logo in primary mode)
  640x360   webp   compact variant (re-encoded if over 150 KiB)

Logos pair with backdrops by position: the first --logo goes with the first
backdrop, and so on. In alternate mode logos are ignored and the hero frame
switches to a centered cover-fill.

Run 'backplate targets' to print the output table.")]
#[command(version = version_string())]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Right-anchored fit everywhere, gradient and logo on the hero frame
    Primary,
    /// Cover-fill hero, no gradient, no logo
    Alternate,
}

impl From<ModeArg> for OperatingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Primary => OperatingMode::Primary,
            ModeArg::Alternate => OperatingMode::Alternate,
        }
    }
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Backdrop image files, in processing order
    #[arg(required = true)]
    backdrops: Vec<PathBuf>,

    /// Logo image paired with the backdrop at the same position (repeatable)
    #[arg(long = "logo")]
    logos: Vec<PathBuf>,

    /// Rendering mode
    #[arg(long, value_enum, default_value = "primary")]
    mode: ModeArg,

    /// Skip the downward hero bias in alternate mode
    #[arg(long)]
    generic: bool,

    /// Output zip archive
    #[arg(long, default_value = archive::ARCHIVE_FILE_NAME)]
    out: PathBuf,

    /// Also write hero preview frames into this directory
    #[arg(long)]
    previews: Option<PathBuf>,

    /// Write a JSON summary of the batch to this file
    #[arg(long)]
    manifest: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Render backdrops into all targets and package them into a zip
    Render(RenderArgs),
    /// Print the output target table
    Targets,
    /// Decode the given images and report their dimensions without rendering
    Check {
        /// Image files to inspect
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Render(args) => {
            let ctx = BatchContext {
                mode: args.mode.into(),
                generic: args.generic,
                backdrops: load_blobs(&args.backdrops)?,
                logos: load_blobs(&args.logos)?,
            };

            let mut progress = ConsoleProgress;
            let mut notifier = ConsoleNotifier;
            let result = run_batch(&ctx, &mut progress, &mut notifier)?;

            let zip_bytes = archive::package_frames(&result.frames)?;
            std::fs::write(&args.out, &zip_bytes)?;

            if let Some(dir) = &args.previews {
                std::fs::create_dir_all(dir)?;
                for preview in &result.previews {
                    std::fs::write(dir.join(&preview.file_name), &preview.bytes)?;
                }
            }

            if let Some(path) = &args.manifest {
                let json = serde_json::to_string_pretty(&result.summary())?;
                std::fs::write(path, json)?;
            }

            print_summary(&result);
            println!("==> Archive written: {}", args.out.display());
        }
        Command::Targets => {
            print_targets();
        }
        Command::Check { files } => {
            for path in &files {
                let bytes = std::fs::read(path)?;
                let image = render::codec::decode(&bytes)?;
                println!(
                    "{}: {}x{}",
                    blob_name(path),
                    image.width(),
                    image.height()
                );
            }
            println!("==> All inputs decodable");
        }
    }

    Ok(())
}

/// Read each path into a named blob; the blob name is the file name only.
fn load_blobs(paths: &[PathBuf]) -> Result<Vec<SourceBlob>, std::io::Error> {
    paths
        .iter()
        .map(|path| {
            Ok(SourceBlob {
                name: blob_name(path),
                bytes: std::fs::read(path)?,
            })
        })
        .collect()
}

fn blob_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
