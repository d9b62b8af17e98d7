use clap::{Parser, Subcommand};
use image_resizer::imaging::{self, RustBackend, ResampleFilter, ResizeRequest};
use image_resizer::{config, output, scan, shell};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "image-resizer")]
#[command(about = "Resize an image to exact pixel dimensions")]
#[command(long_about = "\
Resize an image to exact pixel dimensions

Run without a subcommand for the interactive tool: it lists the files in the
images directory, asks which one to resize and to what width and height, and
writes the result to the output directory. Aspect ratio is not preserved.

Layout (relative to the base directory, which defaults to the directory
holding this executable):

  <base>/
  ├── config.toml        # Optional settings ('image-resizer gen-config')
  ├── images/            # Images offered for resizing
  │   └── beach.jpg
  └── resized_images/    # Created on demand
      └── beach_resized.jpg

The output keeps the input's extension, which also picks the encoder.")]
#[command(version)]
struct Cli {
    /// Directory containing images/ and resized_images/ [default: executable's directory]
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    /// Config file [default: <base-dir>/config.toml, optional]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Resampling filter, overrides the config file
    #[arg(long, global = true, value_enum)]
    filter: Option<ResampleFilter>,

    /// Print diagnostic logs to stderr (RUST_LOG refines the filter)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List files in the images directory with their dimensions
    List,
    /// Resize one image without prompting
    Resize(ResizeArgs),
    /// Print a stock config.toml with all options documented
    GenConfig,
}

#[derive(clap::Args)]
struct ResizeArgs {
    /// Image path, or a file name inside the images directory
    image: PathBuf,

    /// Target width in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Target height in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.log {
        init_logging();
    }

    if let Some(Command::GenConfig) = cli.command {
        print!("{}", config::stock_config_toml());
        return Ok(ExitCode::SUCCESS);
    }

    let base_dir = cli.base_dir.clone().unwrap_or_else(default_base_dir);
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| base_dir.join(config::CONFIG_FILE_NAME));
    let mut site = config::load_config(&config_path)?;
    if let Some(filter) = cli.filter {
        site.resize.filter = filter;
    }

    let images_dir = site.images_dir_in(&base_dir);
    let output_dir = site.output_dir_in(&base_dir);
    let backend = RustBackend::new();

    match cli.command {
        None => {
            let ctx = shell::ShellContext {
                images_dir,
                output_dir,
                images_folder: site.images_dir.clone(),
                options: site.resize_options(),
            };
            let stdin = std::io::stdin();
            shell::run(&backend, &ctx, &mut stdin.lock(), &mut std::io::stdout().lock())?;
        }
        Some(Command::List) => {
            let files = scan::list_images(&images_dir)?;
            if files.is_empty() {
                println!("{}", output::format_no_images(&site.images_dir));
            }
            let entries: Vec<(String, Option<(u32, u32)>)> = files
                .iter()
                .map(|p| {
                    (
                        scan::display_name(p),
                        imaging::get_dimensions(&backend, p).ok(),
                    )
                })
                .collect();
            output::print_image_listing(&entries);
        }
        Some(Command::Resize(args)) => {
            let request = ResizeRequest {
                input: resolve_image_arg(&args.image, &images_dir),
                output_dir,
                width: args.width,
                height: args.height,
            };
            let result = imaging::resize_image(&backend, &request, &site.resize_options());
            output::print_resize_result(&result);
            if result.is_err() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Command::GenConfig) => unreachable!("handled before config loading"),
    }

    Ok(ExitCode::SUCCESS)
}

/// Diagnostics go to stderr so they never mix with prompts on stdout.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// The directory holding the executable, like a script resolving paths next to itself.
fn default_base_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Paths that exist (or are absolute) are used as given; bare names are
/// looked up in the images directory.
fn resolve_image_arg(image: &Path, images_dir: &Path) -> PathBuf {
    if image.is_absolute() || image.exists() {
        image.to_path_buf()
    } else {
        images_dir.join(image)
    }
}
