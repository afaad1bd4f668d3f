// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/binpix

//! Example: pack files into PNGs and back.
//!
//! Arguments ending in `.png` are decoded (output `<name>.png.out`),
//! anything else is encoded (output `<name>.png`).
use std::fs;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!("Usage: file_roundtrip <file>...");
        eprintln!("       *.png arguments are decoded, everything else is encoded");
        return ExitCode::FAILURE;
    }

    let mut status = ExitCode::SUCCESS;
    for path in &args {
        if path.ends_with(".png") {
            let png = match fs::read(path) {
                Ok(b) => b,
                Err(e) => {
                    eprintln!("{path}: {e}");
                    status = ExitCode::FAILURE;
                    continue;
                }
            };
            match binpix::decode_png(&png) {
                Ok(decoded) => {
                    let out = format!("{path}.out");
                    if let Err(e) = fs::write(&out, &decoded.payload) {
                        eprintln!("{out}: {e}");
                        status = ExitCode::FAILURE;
                        continue;
                    }
                    if decoded.integrity_ok {
                        println!("{path} -> {out} ({} bytes)", decoded.payload.len());
                    } else {
                        eprintln!("{path} -> {out}: CHECKSUM MISMATCH, payload may be corrupt");
                        status = ExitCode::FAILURE;
                    }
                }
                Err(e) => {
                    eprintln!("{path}: decode failed: {e}");
                    status = ExitCode::FAILURE;
                }
            }
        } else {
            let payload = match fs::read(path) {
                Ok(b) => b,
                Err(e) => {
                    eprintln!("{path}: {e}");
                    status = ExitCode::FAILURE;
                    continue;
                }
            };
            match binpix::encode_to_png(&payload) {
                Ok(png) => {
                    let out = format!("{path}.png");
                    match fs::write(&out, &png) {
                        Ok(()) => println!(
                            "{path} -> {out} ({} bytes, {}x{} px)",
                            payload.len(),
                            binpix::encoded_side(payload.len()),
                            binpix::encoded_side(payload.len()),
                        ),
                        Err(e) => {
                            eprintln!("{out}: {e}");
                            status = ExitCode::FAILURE;
                        }
                    }
                }
                Err(e) => {
                    eprintln!("{path}: encode failed: {e}");
                    status = ExitCode::FAILURE;
                }
            }
        }
    }
    status
}
