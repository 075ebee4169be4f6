//! Input record for a safety-plan document.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Default shown for absent text fields.
pub const DEFAULT_TEXT: &str = "N/A";

/// Default shown for an absent worker count.
pub const DEFAULT_WORKERS: &str = "0";

/// Default shown when the plan has no content.
pub const DEFAULT_CONTENT: &str = "Contenuto non disponibile";

/// The fields of one safety plan.
///
/// Every field is optional and kept as display text. Absent fields (and
/// explicit JSON `null`s) fall back to the defaults returned by the
/// accessors. Field values are not validated: any JSON scalar is shown in
/// its text form, so `"numWorkers": "5"`, `5` and `5.0` all render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentRequest {
    /// Site address, shown as the plan subject
    #[serde(deserialize_with = "display_text")]
    pub address: Option<String>,

    /// Kind of work carried out on site
    #[serde(deserialize_with = "display_text")]
    pub work_type: Option<String>,

    /// Number of workers on site
    #[serde(deserialize_with = "display_text")]
    pub num_workers: Option<String>,

    /// Document date, free-form
    #[serde(deserialize_with = "display_text")]
    pub date: Option<String>,

    /// Multi-line plan content
    #[serde(deserialize_with = "display_text")]
    pub content: Option<String>,
}

impl DocumentRequest {
    /// Create an empty request (every field defaulted).
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a request from a JSON payload.
    ///
    /// The payload must be a JSON object. Unknown keys are ignored and field
    /// values of any type are accepted.
    ///
    /// # Example
    ///
    /// ```
    /// use pospdf::DocumentRequest;
    ///
    /// let request = DocumentRequest::from_json(r#"{"address":"Via Roma 1","numWorkers":5}"#)?;
    /// assert_eq!(request.address(), "Via Roma 1");
    /// assert_eq!(request.num_workers(), "5");
    /// assert_eq!(request.work_type(), "N/A");
    /// # Ok::<(), pospdf::Error>(())
    /// ```
    pub fn from_json(payload: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(payload).map_err(|e| Error::MalformedInput(e.to_string()))?;

        if !value.is_object() {
            return Err(Error::MalformedInput(format!(
                "expected a JSON object, found {}",
                json_kind(&value)
            )));
        }

        serde_json::from_value(value).map_err(|e| Error::MalformedInput(e.to_string()))
    }

    /// Set the address and return self.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Set the work type and return self.
    pub fn with_work_type(mut self, work_type: impl Into<String>) -> Self {
        self.work_type = Some(work_type.into());
        self
    }

    /// Set the worker count and return self.
    pub fn with_num_workers(mut self, num_workers: i64) -> Self {
        self.num_workers = Some(num_workers.to_string());
        self
    }

    /// Set the date and return self.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Set the content and return self.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Address, or `"N/A"`.
    pub fn address(&self) -> &str {
        self.address.as_deref().unwrap_or(DEFAULT_TEXT)
    }

    /// Work type, or `"N/A"`.
    pub fn work_type(&self) -> &str {
        self.work_type.as_deref().unwrap_or(DEFAULT_TEXT)
    }

    /// Worker count as shown in the field table, or `"0"`.
    pub fn num_workers(&self) -> &str {
        self.num_workers.as_deref().unwrap_or(DEFAULT_WORKERS)
    }

    /// Date, or `"N/A"`.
    pub fn date(&self) -> &str {
        self.date.as_deref().unwrap_or(DEFAULT_TEXT)
    }

    /// Content, or the placeholder sentence.
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or(DEFAULT_CONTENT)
    }
}

/// Accept any JSON value as a field; `null` counts as absent.
fn display_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| text_form(&v)))
}

/// Display text of a JSON value. Booleans read `True`/`False`, containers
/// keep their compact JSON form.
fn text_form(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
