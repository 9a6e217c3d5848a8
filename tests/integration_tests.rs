use serde::{Deserialize, Serialize};
use serde_cfg::{
    from_str, from_value, parse, parse_file, stringify, to_string, to_string_with_options,
    to_value, ErrorKind, KeyOrder, StringifyOptions, Value,
};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
enum Backend {
    Memory,
    Disk { path: String, size_mb: u64 },
    Remote(String),
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Service {
    name: String,
    backend: Backend,
    fallback: Option<Backend>,
    limits: BTreeMap<String, i64>,
}

fn sample_order() -> Order {
    Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.99,
                quantity: 1,
            },
        ],
        total: 109.97,
    }
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    let text = to_string(&user).unwrap();
    assert_eq!(
        text,
        r#"{id=123 name="Alice" active=true tags=["admin" "developer"]}"#
    );

    let user_back: User = from_str(&text).unwrap();
    assert_eq!(user, user_back);
}

#[test]
fn test_nested_struct() {
    let order = sample_order();
    let text = to_string(&order).unwrap();
    let order_back: Order = from_str(&text).unwrap();
    assert_eq!(order, order_back);
}

#[test]
fn test_handwritten_config() {
    let text = r#"
        // order as a human would write it
        {
            order_id = 12345
            total = 109.97
            customer = {
                id = 123
                name = 'Alice'
                active = true
                tags = ['vip']
            }
            items = [
                { sku = "WIDGET-001" price = 29.99 quantity = 2 }
                { sku = "GADGET-002" price = 49.99 quantity = 1 }
            ]
        }
    "#;

    let order: Order = from_str(text).unwrap();
    assert_eq!(order, sample_order());
}

#[test]
fn test_enums_and_options() {
    let service = Service {
        name: "cache".to_string(),
        backend: Backend::Disk {
            path: "/var/cache".to_string(),
            size_mb: 512,
        },
        fallback: Some(Backend::Memory),
        limits: [("conns".to_string(), 64), ("min".to_string(), -1)]
            .into_iter()
            .collect(),
    };

    let text = to_string(&service).unwrap();
    assert_eq!(
        text,
        r#"{name="cache" backend={Disk={path="/var/cache" size_mb=512}} fallback="Memory" limits={conns=64 min=-1}}"#
    );
    assert_eq!(from_str::<Service>(&text).unwrap(), service);

    let remote: Service =
        from_str("{name='x' backend={Remote='db:5432'} fallback=nil limits={}}").unwrap();
    assert_eq!(remote.backend, Backend::Remote("db:5432".to_string()));
    assert_eq!(remote.fallback, None);
}

#[test]
fn test_strings_with_special_characters() {
    let user = User {
        id: 1,
        name: "say \"hi\"\n\tand 'bye' \\ done".to_string(),
        active: false,
        tags: vec![String::new(), "ünïcödé ✓".to_string()],
    };

    let text = to_string(&user).unwrap();
    assert_eq!(from_str::<User>(&text).unwrap(), user);
}

#[test]
fn test_sorted_output() {
    let user = User {
        id: 7,
        name: "Bob".to_string(),
        active: true,
        tags: vec![],
    };

    let options = StringifyOptions::lossless().with_key_order(KeyOrder::Sorted);
    let text = to_string_with_options(&user, &options).unwrap();
    assert_eq!(text, r#"{active=true id=7 name="Bob" tags=[]}"#);
}

#[test]
fn test_missing_field_is_an_error() {
    let err = from_str::<User>("{id=1 name='x' active=true}").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Custom);
    assert!(err.to_string().contains("tags"));
}

#[test]
fn test_syntax_error_reports_location() {
    let err = from_str::<User>("{\n  id = 1\n  name 'x'\n}").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ExpectedEqual);
    assert_eq!(err.line(), Some(3));
    assert!(err.to_string().contains("near ''x''"));
}

#[test]
fn test_value_bridge() {
    let value = to_value(&sample_order()).unwrap();
    assert_eq!(
        value.get("items").unwrap().get(1).unwrap().get("sku").unwrap(),
        &Value::from("GADGET-002")
    );

    let order: Order = from_value(value).unwrap();
    assert_eq!(order, sample_order());
}

#[test]
fn test_value_survives_text() {
    let value = parse("{a=[1 -2 3.5 'x' nil true] b={c={}} \"d e\"=[]}").unwrap();
    assert_eq!(parse(&stringify(&value)).unwrap(), value);
}

#[test]
fn test_json_interop() {
    let value = parse("{name='cfg' ports=[80 443] ratio=0.5 extra=nil}").unwrap();

    let json = serde_json::to_value(&value).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "cfg",
            "ports": [80, 443],
            "ratio": 0.5,
            "extra": null
        })
    );

    let back: Value = serde_json::from_value(json).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_json_value_to_config_text() {
    let json = serde_json::json!({ "enabled": true, "level": 3, "tags": ["a"] });
    let text = to_string(&json).unwrap();
    let value = parse(&text).unwrap();
    assert_eq!(value.get("enabled").unwrap(), &Value::Bool(true));
    assert_eq!(value.get("level").unwrap(), &Value::Int(3));
    assert_eq!(value.get("tags").unwrap().get(0).unwrap(), &Value::from("a"));
}

#[test]
fn test_parse_file() {
    let path = std::env::temp_dir().join(format!("serde_cfg_test_{}.cfg", std::process::id()));
    std::fs::write(&path, "// settings\n{width=640 height=480}\n").unwrap();

    let value = parse_file(&path).unwrap();
    assert_eq!(value.get("width").unwrap().as_int().unwrap(), 640);

    std::fs::write(&path, "{width=640\n height=}").unwrap();
    let err = parse_file(&path).unwrap_err();
    let message = err.to_string();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
    assert!(message.starts_with(&format!("{}: ", path.to_string_lossy())));
    assert!(message.contains("line 2"));
}
