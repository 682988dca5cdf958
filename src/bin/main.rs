//! Geyser Pack Converter CLI
//!
//! Convert Java Edition resource packs into Bedrock packs and Geyser mappings.

use clap::Parser;
use geyser_pack_converter::{
    batch_failed, convert_all, ConverterConfig, ConverterError, PackConverter,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "geyser-pack-converter")]
#[command(
    author,
    version,
    about = "Convert Java Edition resource packs to Bedrock Edition for Geyser",
    long_about = None,
    after_help = "Examples:\n  geyser-pack-converter my_resource_pack.zip\n  geyser-pack-converter /path/to/java/pack --output /path/to/output\n  geyser-pack-converter resource_pack_folder --convert-all"
)]
struct Cli {
    /// Input Java resource pack (ZIP file or directory)
    input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "converted_packs")]
    output: PathBuf,

    /// Convert every ZIP file in the input directory
    #[arg(long)]
    convert_all: bool,

    /// Skip packaging the result as a .mcpack
    #[arg(long)]
    no_mcpack: bool,

    /// Skip copying textures
    #[arg(long)]
    no_textures: bool,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let config = ConverterConfig::default()
        .with_output_dir(&cli.output)
        .with_mcpack(!cli.no_mcpack)
        .with_texture_copy(!cli.no_textures);

    let result = if cli.convert_all && cli.input.is_dir() {
        convert_all(&cli.input, &config).and_then(|results| {
            if batch_failed(&results) {
                return Err(ConverterError::Export(format!(
                    "none of the {} packs converted",
                    results.len()
                )));
            }
            let failed = results.iter().filter(|(_, r)| r.is_err()).count();
            if failed > 0 {
                tracing::warn!("{} of {} packs failed to convert", failed, results.len());
            }
            Ok(())
        })
    } else {
        PackConverter::new(&cli.input, config).convert().map(|output| {
            println!("Bedrock pack: {}", output.bedrock_dir.display());
            if let Some(mcpack) = &output.mcpack {
                println!("Install {} on Bedrock clients", mcpack.display());
            }
            println!(
                "Copy geyser_mappings.json to your Geyser server ({} custom items)",
                output.report.converted.len()
            );
        })
    };

    match result {
        Ok(()) => {
            tracing::info!("All conversions completed, output directory: {}", cli.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Conversion failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}
