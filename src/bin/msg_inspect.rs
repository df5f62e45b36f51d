//! Inspect an encoded `Msg`: decode a binary buffer from a file (or stdin)
//! and print its fields. Exit code 1 on malformed input.
//!
//! Usage: `msg_inspect encoded.bin` or `msg_inspect < encoded.bin`

use anyhow::Context;
use msg_codec::{size_in_bytes, validate, Msg};
use std::io::Read;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let bytes = match args.get(1) {
        Some(path) => std::fs::read(path).with_context(|| format!("reading {}", path))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf).context("reading stdin")?;
            buf
        }
    };

    let msg = Msg::decode(&bytes).context("decoding message")?;

    println!("id:      {}", msg.id());
    println!("type:    {}", msg.kind());
    println!("from_id: {}", msg.from_id());
    println!("to_ids:  [{}]", msg.to_ids().join(", "));
    println!("body:    {}", msg.body());
    println!("size:    {} bytes", size_in_bytes(&msg));
    if !validate(&msg) {
        eprintln!("warning: message has empty required fields");
    }
    Ok(())
}
