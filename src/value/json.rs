use crate::value::types::{Container, Value};

// JSON maps onto the value model without an error path: arrays become
// sequences, objects become maps with their key order preserved.
impl From<serde_json::Value> for Value {
    fn from(raw: serde_json::Value) -> Self {
        match raw {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(flag) => Value::Bool(flag),
            serde_json::Value::Number(number) => {
                if let Some(int) = number.as_i64() {
                    Value::Int(int)
                } else if let Some(float) = number.as_f64() {
                    Value::Float(float)
                } else {
                    // Arbitrary-precision numbers fall back to their
                    // decimal text so the conversion stays total.
                    Value::Text(number.to_string())
                }
            }
            serde_json::Value::String(text) => Value::Text(text),
            serde_json::Value::Array(items) => Value::Container(Container::Seq(
                items.into_iter().map(Value::from).collect(),
            )),
            serde_json::Value::Object(entries) => Value::Container(Container::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            )),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(raw: &serde_json::Value) -> Self {
        Value::from(raw.clone())
    }
}
