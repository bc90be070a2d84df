//! Build an MPK file from a payload on disk

use std::fs;

use mpk::{Package, PackageInfo};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let (payload_path, out_path) = match (args.next(), args.next()) {
        (Some(p), Some(o)) => (p, o),
        _ => return Err("usage: pack <payload> <out.mpk>".into()),
    };

    let payload = fs::read(&payload_path)?;

    let mut info = PackageInfo::new();
    info.set("name", &payload_path);
    info.set("version", "1.0");

    let package = Package::new(info.to_bytes(), Vec::new(), payload);
    fs::write(&out_path, package.encode())?;

    println!("wrote {out_path} ({} bytes)", package.encoded_len());
    Ok(())
}
