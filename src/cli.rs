//! CLI surface for glitchwave
//!
//! Thin collaborator over the session: read files, call the library, write
//! results. The 1-100 intensity flag mirrors the slider the effect ranges
//! were designed around; it maps onto [0, 2] by dividing by 50.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use log::info;

use crate::audio::wav;
use crate::container::DEFAULT_HEADER_SIZE;
use crate::dsp::{slider_to_intensity, EffectKind};
use crate::session::Session;

#[derive(Debug, Parser)]
#[command(name = "glitchwave", version, about = "Audio-domain glitch art for raw bitmaps")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every command that loads a container
#[derive(Debug, Args)]
pub struct ContainerArgs {
    /// Input image (uncompressed BMP)
    pub input: PathBuf,

    /// Header size in bytes
    #[arg(long, default_value_t = DEFAULT_HEADER_SIZE)]
    pub header_size: usize,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Apply an audio effect to the image payload
    Apply {
        #[command(flatten)]
        container: ContainerArgs,

        /// Output image path
        output: PathBuf,

        /// Effect to apply
        #[arg(long, value_enum)]
        effect: EffectKind,

        /// Effect intensity, slider scale 1-100
        #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(1..=100))]
        intensity: u8,
    },

    /// Export the image payload as an 8-bit mono WAV
    ExportAudio {
        #[command(flatten)]
        container: ContainerArgs,

        /// Output WAV path
        output: PathBuf,
    },

    /// Import a WAV back into the image payload
    ImportAudio {
        #[command(flatten)]
        container: ContainerArgs,

        /// WAV file to import
        audio: PathBuf,

        /// Output image path
        output: PathBuf,
    },

    /// Print a JSON summary of the loaded container
    Info {
        #[command(flatten)]
        container: ContainerArgs,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Apply {
            container,
            output,
            effect,
            intensity,
        } => apply(&container, &output, effect, intensity),
        Commands::ExportAudio { container, output } => export_audio(&container, &output),
        Commands::ImportAudio {
            container,
            audio,
            output,
        } => import_audio(&container, &audio, &output),
        Commands::Info { container } => print_info(&container),
    }
}

fn load_session(args: &ContainerArgs) -> anyhow::Result<Session> {
    let bytes = fs::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let mut session = Session::with_header_size(args.header_size);
    session.load(&bytes)?;
    Ok(session)
}

fn apply(args: &ContainerArgs, output: &Path, effect: EffectKind, slider: u8) -> anyhow::Result<()> {
    let mut session = load_session(args)?;

    let intensity = slider_to_intensity(slider);
    session.apply_effect(effect, intensity)?;
    let glitched = session.save()?;

    fs::write(output, glitched).with_context(|| format!("writing {}", output.display()))?;
    info!("wrote glitched image to {}", output.display());
    println!("Applied {} at intensity {}/100", effect, slider);
    Ok(())
}

fn export_audio(args: &ContainerArgs, output: &Path) -> anyhow::Result<()> {
    let session = load_session(args)?;

    let clip = session.export_audio()?;
    wav::write_wav(&clip, output)?;

    println!(
        "Exported {} samples to {}",
        clip.frames.len(),
        output.display()
    );
    Ok(())
}

fn import_audio(args: &ContainerArgs, audio: &Path, output: &Path) -> anyhow::Result<()> {
    let mut session = load_session(args)?;

    let clip = wav::read_wav(audio)?;
    let (_, warning) = session.import_audio(&clip)?;
    if let Some(w) = warning {
        eprintln!("Warning: {}", w);
    }

    let glitched = session.save()?;
    fs::write(output, glitched).with_context(|| format!("writing {}", output.display()))?;
    println!("Imported audio into {}", output.display());
    Ok(())
}

fn print_info(args: &ContainerArgs) -> anyhow::Result<()> {
    let session = load_session(args)?;
    let summary = session.summary();
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
