use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Latest version of a module as reported by `{proxy}/{module}/@v/@latest`
///
/// `name` is not part of the proxy response; it is filled in from the queried
/// module path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ModuleInfo {
    pub name: String,
    pub version: String,
    pub time: String,
    pub origin: Origin,
}

/// Where the module version's source lives
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Origin {
    #[serde(rename = "VCS")]
    pub vcs: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Ref")]
    pub reference: String,
    #[serde(rename = "Hash")]
    pub hash: String,
}

impl ModuleInfo {
    /// Decodes an `@latest` response body.
    ///
    /// The body and its `Origin` must be JSON objects; arrays are rejected rather than
    /// filled in by position. `null` members decode as if they were absent.
    pub fn from_proxy_json(body: &str) -> Result<Self, serde_json::Error> {
        let mut value: Value = serde_json::from_str(body)?;

        let object = expect_object(&mut value, "module info")?;
        object.retain(|_, member| !member.is_null());
        if let Some(origin) = object.get_mut("Origin") {
            expect_object(origin, "Origin")?.retain(|_, member| !member.is_null());
        }

        serde_json::from_value(value)
    }
}

fn expect_object<'a>(
    value: &'a mut Value,
    what: &str,
) -> Result<&'a mut Map<String, Value>, serde_json::Error> {
    let found = match value {
        Value::Object(map) => return Ok(map),
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
    };
    Err(serde_json::Error::custom(format!(
        "expected {} to be a JSON object, found {}",
        what, found
    )))
}
