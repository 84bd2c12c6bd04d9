use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use syxcodec::{Destination, EncodeOptions, Model};
use tracing::{info, Level};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Target {
    /// Dump suitable for saving to disk
    File,
    /// Send to the edit buffer
    Current,
    /// Send and write to the patch location
    Store,
}

impl From<Target> for Destination {
    fn from(t: Target) -> Self {
        match t {
            Target::File => Destination::File,
            Target::Current => Destination::WorkingMemory,
            Target::Store => Destination::Store,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "syxcodec")]
#[command(version = "0.1.0")]
#[command(about = "Encode synthesizer patches as MIDI sysex", long_about = None)]
struct Args {
    /// Output .syx file
    #[arg(required_unless_present = "list_devices")]
    output: Option<PathBuf>,

    /// Input model JSON (reads from stdin if not specified)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Device to encode for
    #[arg(short, long, required_unless_present = "list_devices")]
    device: Option<String>,

    /// MIDI channel, 1-16
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=16))]
    channel: u8,

    /// Where the messages are headed
    #[arg(long, value_enum, default_value_t = Target::File)]
    destination: Target,

    /// Write a dump request for the model's location instead of the patch
    #[arg(short, long)]
    request: bool,

    /// List available devices
    #[arg(short = 'L', long)]
    list_devices: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn read_model(input: Option<&PathBuf>) -> Result<Model, syxcodec::Error> {
    let mut text = String::new();
    match input {
        Some(path) => File::open(path)?.read_to_string(&mut text)?,
        None => io::stdin().read_to_string(&mut text)?,
    };
    Ok(serde_json::from_str(&text)?)
}

fn main() -> Result<(), syxcodec::Error> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if args.list_devices {
        for name in syxcodec::list_devices() {
            println!("{}", name);
        }
        return Ok(());
    }

    let (Some(output), Some(device)) = (args.output, args.device) else {
        return Err(syxcodec::Error::Sysex("output and device are required".to_string()));
    };

    let codec = syxcodec::create_codec(&device)?;
    let mut model = read_model(args.input.as_ref())?;
    codec.revise(&mut model);
    let channel = args.channel - 1;

    let messages = if args.request {
        vec![codec.request_dump(&model, channel)]
    } else {
        codec.encode(&model, &EncodeOptions::new(channel, args.destination.into()))?
    };

    info!(
        "{} {} \"{}\": {} messages",
        codec.name(),
        codec.location_name(&model),
        codec.patch_name(&model),
        messages.len()
    );

    let mut file = File::create(output)?;
    for msg in &messages {
        file.write_all(msg)?;
    }

    Ok(())
}
