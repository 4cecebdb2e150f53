//! Translates the text form into BER encoded data.
//!
//! The text is read from a file or stdin and the resulting octets are
//! written to a file or stdout, optionally wrapped in a PEM block.
//! Variables can be set on the command line and used in the text via
//! `var(name)`.

use std::{fs, io, process};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use clap::Parser;
use der_ascii::encode::{Context, Scanner, exec};
use der_ascii::framing::encode_pem;


#[derive(Parser)]
#[command(version, about = "Translates the text form into BER data.")]
struct Args {
    /// Input file to use (defaults to stdin)
    #[arg(short = 'i', value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file to use (defaults to stdout)
    #[arg(short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Format the output as a PEM block with this type
    #[arg(long, value_name = "TYPE")]
    pem: Option<String>,

    /// Sets the variable NAME to VALUE. May occur multiple times
    #[arg(short = 'd', value_name = "NAME=VALUE", value_parser = parse_pair)]
    define: Vec<(String, String)>,

    /// Sets the variable NAME to the content of FILE. May occur multiple
    /// times
    #[arg(long = "df", value_name = "NAME=FILE", value_parser = parse_pair)]
    define_file: Vec<(String, String)>,
}

fn parse_pair(pair: &str) -> Result<(String, String), String> {
    match pair.split_once('=') {
        Some((name, value)) => Ok((name.into(), value.into())),
        None => Err(format!("missing \"=\": {:?}", pair)),
    }
}

fn read_all(path: Option<&Path>) -> Result<Vec<u8>, String> {
    match path {
        Some(path) => fs::read(path).map_err(|err| {
            format!("Error reading {}: {}", path.display(), err)
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

fn run(args: Args) -> Result<(), String> {
    let mut context = Context::default();
    let files = args.define_file.into_iter().map(|(name, path)| {
        read_all(Some(Path::new(&path))).map(|value| (name, value))
    });
    let pairs = args.define.into_iter().map(|(name, value)| {
        Ok((name, value.into_bytes()))
    });
    for item in pairs.chain(files) {
        let (name, value) = item?;
        if context.vars.contains(&name) {
            return Err(format!(
                "Error: tried to define {:?} with flags twice", name
            ))
        }
        context.vars.insert(name, value);
    }

    let input = read_all(args.input.as_deref())?;
    let mut scanner = Scanner::new(&input);
    if let Some(path) = args.input.as_ref() {
        scanner = scanner.with_file(path.display().to_string());
    }
    let mut data = exec(scanner, &mut context).map_err(|err| {
        format!("Syntax error: {}", err)
    })?.to_vec();

    if let Some(label) = args.pem.as_ref() {
        data = encode_pem(label, &data).into_bytes();
    }

    let res = match args.output.as_ref() {
        Some(path) => fs::write(path, &data),
        None => io::stdout().write_all(&data),
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
