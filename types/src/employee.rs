use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One employee as returned by the HR API.
///
/// Every field is optional on the wire. Fields we don't model are kept in
/// `extra` so the record passes through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    #[serde(default, deserialize_with = "label")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub last_name: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "label")]
    pub department: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub profile_image: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl EmployeeRecord {
    /// Read one element of a listing. Anything that is not an object becomes
    /// an empty record, so it still counts.
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    pub fn display_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !name.is_empty() {
            return name;
        }

        self.username.clone().unwrap_or_else(|| "Unknown".to_string())
    }

    pub fn department_key(&self) -> Option<DepartmentKey> {
        self.department.clone().map(DepartmentKey::Named)
    }
}

/// The value departments are grouped by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepartmentKey {
    Named(String),
    Unassigned,
}

impl fmt::Display for DepartmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepartmentKey::Named(name) => f.write_str(name),
            DepartmentKey::Unassigned => f.write_str("(no department)"),
        }
    }
}

/// Strings and numbers as text. Any other type reads as absent.
fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar(serde_json::Value::deserialize(deserializer)?))
}

/// Like [`text`], but also accepts an object with a `name` (or failing that,
/// an `id`), as foreign keys are sometimes expanded.
fn label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Object(mut object) => object
            .remove("name")
            .and_then(scalar)
            .or_else(|| object.remove("id").and_then(scalar)),
        other => scalar(other),
    })
}

fn scalar(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
