//! Inspect an MPK file: decode it and print its metadata and section sizes

use std::fs::File;
use std::io::BufReader;

use mpk::{DecodeLimits, decode_from};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .ok_or("usage: inspect <file.mpk>")?;

    let file = File::open(&path)?;
    let mut reader = BufReader::new(file);
    let package = decode_from(&mut reader, &DecodeLimits::default())?;

    println!("{path}");
    println!("  signed:  {}", package.is_signed());
    println!("  icon:    {} bytes", package.icon().len());
    println!("  payload: {} bytes", package.payload().len());

    match package.info_fields() {
        Ok(info) => {
            for (key, value) in info.fields() {
                println!("  {key} = {value}");
            }
        }
        Err(err) => println!("  (info not parseable: {err})"),
    }

    Ok(())
}
