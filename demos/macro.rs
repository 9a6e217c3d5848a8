//! Building values with the config! macro.
//!
//! Run with: cargo run --example macro

use serde_cfg::{config, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let nil = config!(nil);
    let flag = config!(true);
    let number = config!(42);
    let offset = config!((-7));
    let text = config!("Hello, config!");

    println!("Scalars:");
    println!("  nil:    {}", nil);
    println!("  bool:   {}", flag);
    println!("  int:    {}", number);
    println!("  signed: {}", offset);
    println!("  string: {}\n", text);

    let numbers = config!([1, 2, 3, 4, 5]);
    let mixed = config!([1, "two", 3.0, nil]);

    println!("Lists:");
    println!("  {}", numbers);
    println!("  {}\n", mixed);

    let settings = config!({
        app: {
            name: "MyApp",
            version: "1.0.0"
        },
        database: {
            host: "localhost",
            port: 5432,
            "pool size": 16
        },
        features: ["auth", "logging", "metrics"],
        debug: true
    });

    println!("Sections:");
    println!("  {}\n", settings);

    let items: Vec<Value> = (1..=3)
        .map(|id| config!({ id: id, status: (if id == 1 { "active" } else { "pending" }) }))
        .collect();
    let summary = config!({ total: (items.len() as i64), items: items });

    println!("Built at runtime:");
    println!("  {}\n", summary);

    let app_name = settings.get("app")?.get("name")?.as_str()?;
    let pool = settings.get("database")?.get("pool size")?.as_int()?;
    println!("Accessing values:");
    println!("  app name:  {}", app_name);
    println!("  pool size: {}", pool);

    Ok(())
}
