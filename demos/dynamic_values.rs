//! Walking and editing a Value tree.
//!
//! Run with: cargo run --example dynamic_values

use serde::Serialize;
use serde_cfg::{parse, to_value, Value};
use std::error::Error;

#[derive(Serialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn describe(value: &Value, indent: usize) {
    let pad = " ".repeat(indent);
    match value {
        Value::Section(section) => {
            for (key, child) in section {
                match child {
                    Value::Section(_) | Value::List(_) => {
                        println!("{}{} ({}):", pad, key, child.kind());
                        describe(child, indent + 2);
                    }
                    _ => println!("{}{} = {} ({})", pad, key, child, child.kind()),
                }
            }
        }
        Value::List(list) => {
            for (i, child) in list.iter().enumerate() {
                println!("{}[{}] = {} ({})", pad, i, child, child.kind());
            }
        }
        other => println!("{}{}", pad, other),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut config = parse("{host='localhost' port=8080 features=['auth' 'logging'] debug=true}")?;

    println!("Structure:");
    describe(&config, 2);

    let port = config.get("port")?.as_int()?;
    println!("\nport as int:  {}", port);
    println!("port as real: {}", config.get("port")?.as_real()?);

    match config.get("host")?.as_int() {
        Ok(_) => println!("host is an int?"),
        Err(e) => println!("host as int:  {}", e),
    }
    match config.get("features")?.get(5) {
        Ok(_) => println!("features has six entries?"),
        Err(e) => println!("features[5]:  {}", e),
    }

    // Edit in place
    *config.get_mut("port")? = Value::from(port + 1);
    config.get_mut("features")?.as_list_mut()?.push(Value::from("metrics"));
    config
        .as_section_mut()?
        .insert("timeout".to_string(), Value::Real(2.5));

    println!("\nEdited:\n  {}", config);

    // Convert an existing struct to Value
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };
    let user_value = to_value(&user)?;
    println!("\nUser as Value:\n  {}", user_value);

    println!("\nType checks:");
    println!("  is_section: {}", user_value.is_section());
    println!("  is_list:    {}", user_value.is_list());
    println!("  is_string:  {}", user_value.is_string());

    Ok(())
}
