use serde_json::{Map, Value};
use crate::ircore::error::{GatewayError, Result};

/// The `method` discriminator of a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Method {
    Search,
    Topics,
    Unrecognized(String),
}

/// Why a numeric request field could not be read.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    Missing,
    Invalid(String),
}

/// A decoded request: one JSON object, read-only.
#[derive(Debug, Clone)]
pub struct Request {
    fields: Map<String, Value>,
}

impl Request {
    pub fn decode(raw: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(fields)) => Ok(Request{fields: fields}),
            Ok(other) => Err(GatewayError::MalformedRequest(
                format!("expected a JSON object, got {}", json_type(&other)))),
            Err(e) => Err(GatewayError::MalformedRequest(e.to_string())),
        }
    }

    // an absent method means search
    pub fn method(&self) -> Method {
        match self.fields.get("method") {
            None => Method::Search,
            Some(Value::String(s)) if s == "search" => Method::Search,
            Some(Value::String(s)) if s == "topics" => Method::Topics,
            Some(Value::String(s)) => Method::Unrecognized(s.clone()),
            Some(other) => Method::Unrecognized(other.to_string()),
        }
    }

    /// Text value of a field. Numbers are rendered as text, other JSON
    /// types read as absent.
    pub fn get_text(&self, field: &str) -> Option<String> {
        match self.fields.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn get_ranker(&self) -> String {
        self.get_text("ranker").unwrap_or_default()
    }

    pub fn get_query(&self) -> String {
        self.get_text("query").unwrap_or_default()
    }

    /// Numeric parameter, transmitted as text. Infinities pass through, NaN
    /// is invalid.
    pub fn get_number(&self, field: &str) -> std::result::Result<f64, ParamError> {
        let text = self.get_param_text(field)?;
        match text.trim().parse::<f64>() {
            Ok(value) if !value.is_nan() => Ok(value),
            _ => Err(ParamError::Invalid(text)),
        }
    }

    pub fn get_count(&self, field: &str) -> std::result::Result<usize, ParamError> {
        let text = self.get_param_text(field)?;
        text.trim().parse::<usize>().map_err(|_| ParamError::Invalid(text))
    }

    fn get_param_text(&self, field: &str) -> std::result::Result<String, ParamError> {
        match self.fields.get(field) {
            None => Err(ParamError::Missing),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(other) => Err(ParamError::Invalid(other.to_string())),
        }
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
