use std::path::PathBuf;

use clap::Parser;
use tmds::virgen::{decoder_module, encoder_module};
use tmds::*;

#[derive(Debug, Parser)]
#[command(name = "tmds-gen", about = "Generate TMDS 8b/10b lookup modules in Verilog")]
struct Args {
    /// Output directory for generated modules.
    #[arg(long, default_value = "./build")]
    out: PathBuf,

    /// Name of the decoder module.
    #[arg(long, default_value = "tmds_decoder")]
    decoder_name: String,

    /// Also generate the encoder module `tmds_encoder`.
    #[arg(long)]
    encoder: bool,
}

fn run(args: &Args) -> Result<(), PackageError> {
    let table = build_table().map_err(|error| PackageError::Table { error })?;
    tracing::info!("TMDS table has {} symbols", table.len());

    let mut package = Package::default();

    package.add(decoder_module(&args.decoder_name, &table));
    if args.encoder {
        package.add(encoder_module("tmds_encoder"));
    }

    package.gen_vir(&args.out)
}

fn main() -> Result<(), PackageError> {
    tracing_subscriber::fmt::init();
    run(&Args::parse())
}
