//! Translates BER encoded data into the text form.
//!
//! The data is read from a file or stdin, optionally unwrapped from PEM,
//! a hex dump or an array of integers, and the text is written to a file
//! or stdout.

use std::{fs, io, process};
use std::io::{Read, Write};
use std::path::PathBuf;
use clap::{ArgGroup, Parser};
use der_ascii::framing::{PemBlock, decode_array, decode_hex};
use der_ascii::print::Printer;


#[derive(Parser)]
#[command(version, about = "Translates BER data into the text form.")]
#[command(group(
    ArgGroup::new("format").args(["pem", "pem_all", "hex", "array"])
))]
struct Args {
    /// Input file to use (defaults to stdin)
    #[arg(short = 'i', value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file to use (defaults to stdout)
    #[arg(short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Treat the input as PEM and decode the first PEM block
    #[arg(long)]
    pem: bool,

    /// Treat the input as PEM and decode all PEM blocks
    #[arg(long)]
    pem_all: bool,

    /// Treat the input as hex, ignoring punctuation and whitespace
    #[arg(long)]
    hex: bool,

    /// Treat the input as an array of comma-separated integers
    #[arg(long)]
    array: bool,
}

/// A chunk of data to translate with an optional heading.
struct Input {
    comment: Option<String>,
    data: Vec<u8>,
}

impl Input {
    fn plain(data: Vec<u8>) -> Self {
        Input { comment: None, data }
    }
}

fn read_input(args: &Args) -> Result<Vec<u8>, String> {
    match args.input.as_ref() {
        Some(path) => fs::read(path).map_err(|err| {
            format!("Error opening {}: {}", path.display(), err)
        }),
        None => {
            let mut res = Vec::new();
            io::stdin().read_to_end(&mut res).map_err(|err| {
                format!("Error reading input: {}", err)
            })?;
            Ok(res)
        }
    }
}

fn unwrap_input(args: &Args, data: Vec<u8>) -> Result<Vec<Input>, String> {
    if args.pem_all {
        let blocks = PemBlock::decode_all(&data);
        if blocks.is_empty() {
            return Err(
                "--pem-all provided, but input could not be parsed as PEM"
                    .into()
            )
        }
        Ok(blocks.into_iter().map(|block| {
            Input { comment: Some(block.label), data: block.data }
        }).collect())
    }
    else if args.pem {
        match PemBlock::decode_first(&data) {
            Some((block, _)) => Ok(vec![Input::plain(block.data)]),
            None => Err(
                "--pem provided, but input could not be parsed as PEM".into()
            )
        }
    }
    else if args.hex {
        decode_hex(&data).map(|data| vec![Input::plain(data)]).map_err(|err| {
            format!("--hex provided, but input could not be parsed: {}", err)
        })
    }
    else if args.array {
        decode_array(&data).map(|data| vec![Input::plain(data)]).map_err(
            |err| format!("Error decoding array: {}", err)
        )
    }
    else {
        Ok(vec![Input::plain(data)])
    }
}

fn run(args: Args) -> Result<(), String> {
    let data = read_input(&args)?;
    let inputs = unwrap_input(&args, data)?;

    let printer = Printer::new();
    let mut text = String::new();
    for (idx, input) in inputs.iter().enumerate() {
        if let Some(comment) = input.comment.as_ref() {
            if idx > 0 {
                text.push('\n');
            }
            text.push_str("# ");
            text.push_str(comment);
            text.push('\n');
        }
        text.push_str(&printer.render(&input.data));
    }

    let res = match args.output.as_ref() {
        Some(path) => fs::write(path, text),
        None => io::stdout().write_all(text.as_bytes()),
    };
    res.map_err(|err| format!("Error writing output: {}", err))
}

fn main() {
    env_logger::init();
    if let Err(err) = run(Args::parse()) {
        eprintln!("{}", err);
        process::exit(1)
    }
}
