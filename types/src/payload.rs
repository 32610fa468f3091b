use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::employee::EmployeeRecord;

/// The shapes the employee listing endpoint is known to answer with.
///
/// Resolved from the JSON value itself, so an odd field inside one record
/// never changes which shape the whole body is read as.
#[derive(Debug, Clone)]
pub enum EmployeesPayload {
    /// A bare JSON array. Every element is one record.
    List(Vec<EmployeeRecord>),
    /// A paginated envelope. Any JSON object lands here, with or without `results`.
    Page(Page),
    Unrecognized(Value),
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    pub results: Option<Vec<EmployeeRecord>>,
    pub count: Option<u64>,
    pub next: Option<String>,
}

impl Page {
    /// Fields of the wrong type read as absent.
    fn from_object(mut object: Map<String, Value>) -> Self {
        Page {
            results: match object.remove("results") {
                Some(Value::Array(items)) => Some(records(items)),
                _ => None,
            },
            count: object.get("count").and_then(Value::as_u64),
            next: object.get("next").and_then(Value::as_str).map(str::to_owned),
        }
    }
}

fn records(items: Vec<Value>) -> Vec<EmployeeRecord> {
    items.into_iter().map(EmployeeRecord::from_value).collect()
}

impl From<Value> for EmployeesPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(items) => EmployeesPayload::List(records(items)),
            Value::Object(object) => EmployeesPayload::Page(Page::from_object(object)),
            other => EmployeesPayload::Unrecognized(other),
        }
    }
}

impl<'de> Deserialize<'de> for EmployeesPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(EmployeesPayload::from)
    }
}

impl EmployeesPayload {
    pub fn shape(&self) -> &'static str {
        match self {
            EmployeesPayload::List(_) => "list",
            EmployeesPayload::Page(_) => "page",
            EmployeesPayload::Unrecognized(_) => "unrecognized",
        }
    }

    /// Link to the following page, if this is an envelope that has one.
    pub fn next_page(&self) -> Option<&str> {
        match self {
            EmployeesPayload::Page(page) => page.next.as_deref(),
            _ => None,
        }
    }

    pub fn into_records(self) -> Vec<EmployeeRecord> {
        match self {
            EmployeesPayload::List(records) => records,
            EmployeesPayload::Page(page) => page.results.unwrap_or_default(),
            EmployeesPayload::Unrecognized(_) => Vec::new(),
        }
    }
}
