// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 mmh3 contributors

//! mmh3sum: MurmurHash3 x64-128 digests for files or stdin.
//!
//! Output format follows md5sum: `<32 hex digits>  <name>`, where the hex
//! string is `h1` then `h2`, each printed big-endian. With `--token` the
//! signed ring token is printed instead.

use std::env;
use std::fs::File;
use std::io::{self, Read};
use std::process::ExitCode;

use mmh3::{hash128, token};

struct Options {
    seed: u32,
    token_mode: bool,
    inputs: Vec<String>,
}

fn usage() {
    eprintln!("Usage: mmh3sum [--seed N] [--token] [FILE...]");
    eprintln!();
    eprintln!("Computes the MurmurHash3 x64-128 digest of each FILE, or of");
    eprintln!("stdin when no FILE (or '-') is given.");
    eprintln!();
    eprintln!("  --seed N   32-bit seed (decimal or 0x-prefixed hex, default 0)");
    eprintln!("  --token    print the signed partition ring token (seed 0)");
}

fn parse_seed(arg: &str) -> Result<u32, String> {
    let parsed = if let Some(hex) = arg.strip_prefix("0x") {
        u32::from_str_radix(hex, 16)
    } else {
        arg.parse()
    };
    parsed.map_err(|_| format!("invalid seed '{arg}' (expected 32-bit unsigned)"))
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut opts = Options {
        seed: 0,
        token_mode: false,
        inputs: Vec::new(),
    };
    let mut it = args.iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--seed" => {
                let value = it.next().ok_or("--seed requires a value")?;
                opts.seed = parse_seed(value)?;
            }
            "--token" => opts.token_mode = true,
            "--help" | "-h" => return Err(String::new()),
            other => opts.inputs.push(other.to_string()),
        }
    }
    if opts.token_mode && opts.seed != 0 {
        return Err("--token always uses seed 0; --seed is not applicable".to_string());
    }
    if opts.inputs.is_empty() {
        opts.inputs.push("-".to_string());
    }
    Ok(opts)
}

fn read_input(name: &str) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    if name == "-" {
        io::stdin().lock().read_to_end(&mut data)?;
    } else {
        File::open(name)?.read_to_end(&mut data)?;
    }
    Ok(data)
}

fn format_line(opts: &Options, name: &str, data: &[u8]) -> String {
    if opts.token_mode {
        format!("{}  {}", token(data), name)
    } else {
        let (h1, h2) = hash128(data, opts.seed);
        format!("{h1:016x}{h2:016x}  {name}")
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let opts = match parse_args(&args) {
        Ok(opts) => opts,
        Err(msg) => {
            if !msg.is_empty() {
                eprintln!("mmh3sum: {msg}");
                eprintln!();
            }
            usage();
            return ExitCode::from(2);
        }
    };

    let mut failed = false;
    for name in &opts.inputs {
        match read_input(name) {
            Ok(data) => println!("{}", format_line(&opts, name, &data)),
            Err(e) => {
                eprintln!("mmh3sum: {name}: {e}");
                failed = true;
            }
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
