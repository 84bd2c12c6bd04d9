//! Sysex dump to JSON converter

use clap::Parser;
use flate2::read::GzDecoder;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use syxcodec::{display, frame, DumpKind, Model};
use tracing::{warn, Level};

#[derive(Parser, Debug)]
#[command(name = "syx2json")]
#[command(version = "0.1.0")]
#[command(about = "Convert sysex patch dumps to JSON", long_about = None)]
struct Args {
    /// Input .syx or .syx.gz file
    input: PathBuf,

    /// Output JSON file (writes to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output compact JSON (default is pretty-printed)
    #[arg(short, long)]
    compact: bool,

    /// Patch number to extract from a bank dump
    #[arg(short, long)]
    number: Option<i32>,

    /// Show values as front panel labels
    #[arg(short, long)]
    labels: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let level = if args.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let data = read_syx_file(&args.input)?;

    let mut dumps = Vec::new();
    for msg in frame::split_messages(&data) {
        let Some(kind) = syxcodec::identify(msg) else {
            warn!("skipping {} byte message", msg.len());
            continue;
        };
        let model = kind.codec().decode(msg, args.number)?;
        dumps.push(if args.labels {
            labelled(kind, &model)
        } else {
            serde_json::to_value(&model)?
        });
    }

    let json = match dumps.len() {
        0 => return Err(Box::new(syxcodec::Error::Unrecognized(args.input.display().to_string()))),
        1 => dumps.remove(0),
        _ => Value::Array(dumps),
    };

    let json_string = if args.compact {
        serde_json::to_string(&json)?
    } else {
        serde_json::to_string_pretty(&json)?
    };

    match args.output {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(json_string.as_bytes())?;
            file.write_all(b"\n")?;
        }
        None => {
            println!("{}", json_string);
        }
    }

    Ok(())
}

fn labelled(kind: DumpKind, model: &Model) -> Value {
    let map: Map<String, Value> = model
        .keys()
        .map(|key| (key.to_string(), Value::String(display::format_param(kind, model, key))))
        .collect();
    Value::Object(map)
}

/// Read a sysex file, decompressing if necessary
fn read_syx_file(path: &PathBuf) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    File::open(path)?.read_to_end(&mut data)?;

    // gzip magic
    if data.len() >= 2 && data[0] == 0x1f && data[1] == 0x8b {
        let mut decoder = GzDecoder::new(data.as_slice());
        let mut decompressed = Vec::new();
        decoder.read_to_end(&mut decompressed)?;
        Ok(decompressed)
    } else {
        Ok(data)
    }
}
