//! Customizing parsing and output with ParseOptions and StringifyOptions.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use serde_cfg::{
    parse_with_options, stringify_with_options, to_string_with_options, KeyOrder, ParseOptions,
    StringifyOptions,
};
use std::error::Error;

#[derive(Serialize)]
struct Banner {
    title: String,
    message: String,
    width: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    let value = parse_with_options("{zeta=1 alpha=2 mid=3}", &ParseOptions::default())?;

    println!("Insertion order (default):");
    println!("  {}\n", stringify_with_options(&value, &StringifyOptions::default()));

    println!("Sorted keys:");
    let sorted = StringifyOptions::new().with_key_order(KeyOrder::Sorted);
    println!("  {}\n", stringify_with_options(&value, &sorted));

    let banner = Banner {
        title: "Release \"2.0\"".to_string(),
        message: "line one\nline two".to_string(),
        width: 40,
    };

    println!("Verbatim strings (does not read back):");
    println!("  {}\n", to_string_with_options(&banner, &StringifyOptions::new())?);

    println!("Escaped strings (lossless):");
    println!("  {}\n", to_string_with_options(&banner, &StringifyOptions::lossless())?);

    println!("Depth limit and source labels:");
    let strict = ParseOptions::new().with_max_depth(2).with_path("strict.cfg");
    match parse_with_options("{a={b={c=1}}}", &strict) {
        Ok(value) => println!("  parsed {}", value),
        Err(e) => println!("  {}", e),
    }

    Ok(())
}
