//! Reading a config file into a struct and writing it back.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_cfg::{from_str, to_string};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Database {
    host: String,
    port: u16,
    replicas: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct AppConfig {
    name: String,
    debug: bool,
    database: Database,
}

const SOURCE: &str = r#"
// application settings
{
    name = 'inventory'
    debug = false
    database = {
        host = "db.internal"
        port = 5432
        replicas = ["db-ro-1" "db-ro-2"]
    }
}
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let config: AppConfig = from_str(SOURCE)?;
    println!("Parsed:\n{:#?}\n", config);

    let text = to_string(&config)?;
    println!("Written back:\n{}\n", text);

    let config_back: AppConfig = from_str(&text)?;
    assert_eq!(config, config_back);
    println!("✓ Round-trip successful");

    Ok(())
}
