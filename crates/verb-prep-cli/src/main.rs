mod logger;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use verb_prep::{MaterializeOptions, NormalizeOptions, ProjectLayout};

#[derive(Parser)]
#[command(name = "verbprep", about = "Verb dataset preparation tools", version)]
struct Cli {
    /// Project root; every default path is resolved against it
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize the verb CSV into the JSON dataset
    Normalize(NormalizeArgs),

    /// Resize raw images and point the dataset at them
    Images(ImagesArgs),

    /// Run `normalize` then `images`
    Prepare {
        #[command(flatten)]
        normalize: NormalizeArgs,

        #[command(flatten)]
        images: ImagesArgs,
    },
}

#[derive(Args)]
struct NormalizeArgs {
    /// Input CSV [default: <root>/data/verbs_short.csv]
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output dataset [default: <root>/public/verbs.json]
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct ImagesArgs {
    /// Dataset rewritten in place [default: <root>/public/verbs.json]
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Raw image directory [default: <root>/data/images_raw]
    #[arg(long)]
    raw_dir: Option<PathBuf>,

    /// Output image directory [default: <root>/public/images/verbs]
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Prefix stored in each record's image path
    #[arg(long, default_value = verb_prep::PUBLIC_IMAGE_PREFIX)]
    public_prefix: String,

    /// Maximum output width in pixels
    #[arg(long, default_value_t = verb_prep::TARGET_WIDTH)]
    width: u32,

    /// Encoder quality (1-100)
    #[arg(long, default_value_t = verb_prep::IMAGE_QUALITY)]
    quality: u8,

    /// Output image format
    #[arg(long, default_value = "webp", value_enum)]
    format: FormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Webp,
    Jpeg,
}

impl From<FormatArg> for verb_prep::ImageFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Webp => Self::WebP,
            FormatArg::Jpeg => Self::Jpeg,
        }
    }
}

impl NormalizeArgs {
    fn into_options(self, layout: &ProjectLayout) -> NormalizeOptions {
        let defaults = NormalizeOptions::from_layout(layout);
        NormalizeOptions {
            input_csv: self.input.unwrap_or(defaults.input_csv),
            output_json: self.output.unwrap_or(defaults.output_json),
        }
    }
}

impl ImagesArgs {
    fn into_options(self, layout: &ProjectLayout) -> MaterializeOptions {
        let defaults = MaterializeOptions::from_layout(layout);
        MaterializeOptions {
            dataset: self.dataset.unwrap_or(defaults.dataset),
            raw_image_dir: self.raw_dir.unwrap_or(defaults.raw_image_dir),
            output_image_dir: self.out_dir.unwrap_or(defaults.output_image_dir),
            public_prefix: self.public_prefix,
            target_width: self.width,
            quality: self.quality,
            format: self.format.into(),
        }
    }
}

/// Options for `prepare`. Without `--dataset`, the images job reads the
/// dataset normalize writes.
fn prepare_options(
    normalize_args: NormalizeArgs,
    mut images_args: ImagesArgs,
    layout: &ProjectLayout,
) -> (NormalizeOptions, MaterializeOptions) {
    let normalize_options = normalize_args.into_options(layout);
    images_args
        .dataset
        .get_or_insert_with(|| normalize_options.output_json.clone());
    (normalize_options, images_args.into_options(layout))
}

async fn normalize(options: &NormalizeOptions) -> Result<()> {
    let report = verb_prep::run_normalizer(options).await?;
    println!(
        "OK → {} verbs written to {}",
        report.records,
        report.output.display()
    );
    Ok(())
}

/// Missing images are reported, never an error.
async fn images(options: &MaterializeOptions) -> Result<()> {
    let report = verb_prep::run_materializer(options).await?;
    println!("Processed images: {}", report.processed);
    if !report.missing.is_empty() {
        println!("Missing images for:");
        for id in &report.missing {
            println!(" - {}", id);
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::ConsoleLogger::from_verbosity(cli.verbose).init()?;

    let layout = ProjectLayout::new(cli.root);

    match cli.command {
        Commands::Normalize(args) => {
            normalize(&args.into_options(&layout)).await?;
        }

        Commands::Images(args) => {
            images(&args.into_options(&layout)).await?;
        }

        Commands::Prepare {
            normalize: normalize_args,
            images: images_args,
        } => {
            let (normalize_options, images_options) =
                prepare_options(normalize_args, images_args, &layout);
            normalize(&normalize_options).await?;
            images(&images_options).await?;
        }
    }

    Ok(())
}
