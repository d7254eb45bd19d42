use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

pub struct JsonSerializerImpl;

impl JsonSerializerImpl {
    pub fn deserialize<'a, T: Deserialize<'a>>(value: &'a str) -> Result<T, serde_json::Error> {
        serde_json::from_str(value)
    }

    pub fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn to_query_string(value: &Value) -> String {
        value.to_string()
    }
}
