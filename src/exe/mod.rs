//! reads data from stdin and writes its Base58Check encoding to stdout
use std::io::{self, Read, Write};
use std::process::ExitCode;

use base58check::{decode_raw, encode_raw, DecodeError};
use thiserror::Error;

use crate::args::FlagSet;

pub mod args;

macro_rules! print_err {
    ($err:expr, $($msg:tt)*) => {{
        use std::error::Error;

        let err = $err;
        eprint!($($msg)*);
        eprintln!(": {err}");
        let mut err_ref = &err as &dyn Error;
        loop {
            if let Some(next) = err_ref.source() {
                eprintln!("\tSource: {next}");
                err_ref = next;
            } else {
                break;
            }
        }
    }};
}

fn print_usage() {
    eprintln!(
        "usage: base58check [-d] [-h]\n\n\
        Reads data from stdin, encodes it in Base58Check, and writes the encoding to\n\
        stdout. Specify -d to decode instead. Specify -h to use hex data input/output."
    );
}

fn main() -> ExitCode {
    let mut flags = FlagSet::default();
    let opt_decode = flags.add(Some('d'), Some("decode"));
    let opt_hex = flags.add(Some('h'), Some("hex"));
    let opt_help = flags.add(None, Some("help"));
    let opt_version = flags.add(None, Some("version"));
    // the first argument is the path to the executable
    if let Err(e) = args::parse(std::env::args().skip(1), &mut flags) {
        print_err!(e, "Command error");
        print_usage();
        return ExitCode::FAILURE;
    }
    if flags.is_set(opt_help) {
        print_usage();
        return ExitCode::SUCCESS;
    }
    if flags.is_set(opt_version) {
        println!("base58check {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }
    let result = if flags.is_set(opt_decode) {
        run_decode(flags.is_set(opt_hex))
    } else {
        run_encode(flags.is_set(opt_hex))
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_err!(e, "Error");
            ExitCode::FAILURE
        }
    }
}

fn run_encode(hex_io: bool) -> Result<(), CliError> {
    let mut data = read_stdin()?;
    if hex_io {
        data = hex::decode(data.trim_ascii()).map_err(CliError::Hex)?;
    }
    let mut out = io::stdout();
    writeln!(out, "{}", encode_raw(&data)).map_err(CliError::Stdout)
}

fn run_decode(hex_io: bool) -> Result<(), CliError> {
    let data = read_stdin()?;
    // everything up to the first newline is the encoding
    let line = match data.iter().position(|&b| b == b'\n') {
        None => &data[..],
        Some(end) => &data[..end],
    };
    let text = String::from_utf8_lossy(line);
    let decoded = decode_raw(&text).map_err(CliError::Decode)?;
    let mut out = io::stdout();
    if hex_io {
        writeln!(out, "{}", hex::encode(&decoded)).map_err(CliError::Stdout)
    } else {
        out.write_all(&decoded).map_err(CliError::Stdout)
    }
}

fn read_stdin() -> Result<Vec<u8>, CliError> {
    let mut data = Vec::new();
    io::stdin().read_to_end(&mut data).map_err(CliError::Stdin)?;
    Ok(data)
}

#[derive(Debug, Error)]
enum CliError {
    #[error("error reading from stdin")]
    Stdin(#[source] io::Error),
    #[error("error writing to stdout")]
    Stdout(#[source] io::Error),
    #[error("invalid hex on stdin")]
    Hex(#[source] hex::FromHexError),
    #[error("input was not a valid Base58Check encoding")]
    Decode(#[source] DecodeError),
}
