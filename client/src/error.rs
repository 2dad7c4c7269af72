use serde::Serialize;
use wasm_bindgen::JsValue;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum Error {
    Config(String),
    Items(String),
    Serialize(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Config(msg) => write!(f, "config error: {}", msg),
            Error::Items(msg) => write!(f, "display items error: {}", msg),
            Error::Serialize(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl Error {
    pub fn js_value(&self) -> JsValue {
        JsValue::from_serde(&self).unwrap_or_else(|_| JsValue::from_str(&format!("{}", self)))
    }
}
