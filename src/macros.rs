/// Builds a [`Value`](crate::Value) from config-like literal syntax.
///
/// - `nil`, `true` and `false` map to the matching keywords
/// - `[a, b, c]` builds a list
/// - `{key: value, "any key": value}` builds a section; keys are identifiers or
///   string literals and keep their written order
/// - any other single token goes through `Value::from`, so a negative number or a
///   computed value must be parenthesized: `(-3)`, `(x + 1)`
///
/// # Examples
///
/// ```rust
/// use serde_cfg::{config, Value};
///
/// let value = config!({
///     name: "server",
///     "listen addr": "0.0.0.0",
///     ports: [80, 443],
///     offset: (-3),
///     debug: false,
///     parent: nil,
/// });
///
/// assert_eq!(
///     value.to_string(),
///     r#"{name="server" "listen addr"="0.0.0.0" ports=[80 443] offset=-3 debug=false parent=nil}"#
/// );
/// assert_eq!(config!([]), Value::List(vec![]));
/// ```
#[macro_export]
macro_rules! config {
    (@key $key:ident) => {
        ::core::stringify!($key)
    };

    (@key $key:literal) => {
        $key
    };

    (nil) => {
        $crate::Value::Nil
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::List(vec![])
    };

    ([ $($elem:tt),+ $(,)? ]) => {
        $crate::Value::List(vec![$($crate::config!($elem)),+])
    };

    ({}) => {
        $crate::Value::Section($crate::Section::new())
    };

    ({ $($key:tt : $value:tt),+ $(,)? }) => {{
        let mut section = $crate::Section::new();
        $(
            section.insert($crate::config!(@key $key).to_string(), $crate::config!($value));
        )+
        $crate::Value::Section(section)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Section, Value};

    #[test]
    fn test_config_macro_primitives() {
        assert_eq!(config!(nil), Value::Nil);
        assert_eq!(config!(true), Value::Bool(true));
        assert_eq!(config!(false), Value::Bool(false));
        assert_eq!(config!(42), Value::Int(42));
        assert_eq!(config!((-42)), Value::Int(-42));
        assert_eq!(config!(3.5), Value::Real(3.5));
        assert_eq!(config!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_config_macro_lists() {
        assert_eq!(config!([]), Value::List(vec![]));
        assert_eq!(
            config!([1, [true, nil], "x",]),
            Value::List(vec![
                Value::Int(1),
                Value::List(vec![Value::Bool(true), Value::Nil]),
                Value::from("x"),
            ])
        );
    }

    #[test]
    fn test_config_macro_sections() {
        assert_eq!(config!({}), Value::Section(Section::new()));

        let value = config!({
            name: "Alice",
            "home dir": "/home/alice",
            limits: { cpu: 2, mem: 1.5 }
        });

        let section = value.as_section().unwrap();
        assert_eq!(section.len(), 3);
        assert_eq!(section.get("name"), Some(&Value::from("Alice")));
        assert_eq!(section.get("home dir"), Some(&Value::from("/home/alice")));
        assert_eq!(
            value.get("limits").unwrap().get("mem").unwrap(),
            &Value::Real(1.5)
        );
        assert_eq!(
            section.keys().collect::<Vec<_>>(),
            vec!["name", "home dir", "limits"]
        );
    }

    #[test]
    fn test_config_macro_expressions() {
        let port = 8000;
        let value = config!({ port: (port + 80), label: (format!("p{}", port)) });
        assert_eq!(value.get("port").unwrap(), &Value::Int(8080));
        assert_eq!(value.get("label").unwrap(), &Value::from("p8000"));
    }
}
