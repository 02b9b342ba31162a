use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key under which the loader records the originating file name.
pub const FILENAME_KEY: &str = "_filename";

/// One catalog entry as authored in its JSON file.
///
/// The record is kept as an open JSON object so that unknown fields survive
/// a load/export cycle in their authored order. Recognized fields are read
/// through the accessors below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentRecord {
    fields: Map<String, Value>,
}

impl AgentRecord {
    /// Parses a record from raw JSON. Anything other than an object is rejected.
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Attaches the provenance tag. Called by the loader before the record is
    /// handed out.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.fields
            .insert(FILENAME_KEY.to_string(), Value::String(filename.into()));
        self
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn name(&self) -> Option<String> {
        self.text(fields::NAME)
    }

    pub fn description(&self) -> Option<String> {
        self.text(fields::DESCRIPTION)
    }

    pub fn model(&self) -> Option<String> {
        self.text(fields::MODEL)
    }

    pub fn system_prompt(&self) -> Option<String> {
        self.text(fields::SYSTEM_PROMPT)
    }

    pub fn periodic_runs(&self) -> Option<String> {
        self.text(fields::PERIODIC_RUNS)
    }

    pub fn filename(&self) -> Option<String> {
        self.text(FILENAME_KEY)
    }

    /// Name shown on cards and detail titles.
    pub fn display_name(&self) -> String {
        self.name().unwrap_or_else(|| "Unnamed Agent".to_string())
    }

    /// Text form of a field. Empty strings, `null`, arrays and objects have
    /// no text.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.fields.get(key)? {
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Whether the field exists with a truthy value.
    pub fn flag(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(is_truthy)
    }

    /// Whether the field exists and is neither `null` nor an empty string.
    pub fn is_present(&self, key: &str) -> bool {
        match self.fields.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }

    /// Length of a sequence field. Non-sequence values count as empty.
    pub fn count(&self, key: &str) -> usize {
        match self.fields.get(key) {
            Some(Value::Array(items)) => items.len(),
            _ => 0,
        }
    }

    /// Indented JSON with authored key order.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.fields).unwrap_or_else(|_| "{}".to_string())
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Recognized field names.
pub mod fields {
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const MODEL: &str = "model";
    pub const SYSTEM_PROMPT: &str = "system_prompt";
    pub const STANDALONE_JOB: &str = "standalone_job";
    pub const ENABLE_PLANNING: &str = "enable_planning";
    pub const ENABLE_REASONING: &str = "enable_reasoning";
    pub const ENABLE_KB: &str = "enable_kb";
    pub const ENABLE_SKILLS: &str = "enable_skills";
    pub const PERIODIC_RUNS: &str = "periodic_runs";
    pub const CONNECTORS: &str = "connectors";
    pub const ACTIONS: &str = "actions";
    pub const MCP_SERVERS: &str = "mcp_servers";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> AgentRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_rejects_non_object_json() {
        assert!(AgentRecord::from_json("[1, 2]").is_err());
        assert!(AgentRecord::from_json("\"bot\"").is_err());
        assert!(AgentRecord::from_json("{\"name\": \"bot\"}").is_ok());
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(record(json!({})).display_name(), "Unnamed Agent");
        assert_eq!(record(json!({"name": ""})).display_name(), "Unnamed Agent");
        assert_eq!(record(json!({"name": "Bot"})).display_name(), "Bot");
    }

    #[test]
    fn test_text_of_scalar_fields() {
        let r = record(json!({"periodic_runs": 30, "model": null, "name": ["x"]}));
        assert_eq!(r.periodic_runs().as_deref(), Some("30"));
        assert_eq!(r.model(), None);
        assert_eq!(r.name(), None);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!(1.5)));
    }

    #[test]
    fn test_with_filename_appends_last() {
        let r = record(json!({"name": "Bot", "model": "gpt-4"})).with_filename("bot.json");
        let keys: Vec<&String> = r.fields().keys().collect();
        assert_eq!(keys, vec!["name", "model", "_filename"]);
        assert_eq!(r.filename().as_deref(), Some("bot.json"));
    }

    #[test]
    fn test_pretty_json_keeps_authored_order() {
        let r = AgentRecord::from_json(r#"{"zeta": 1, "alpha": 2}"#).unwrap();
        let json = r.to_pretty_json();
        assert!(json.find("zeta").unwrap() < json.find("alpha").unwrap());
        assert!(json.contains("\n  \"zeta\": 1"));
    }

    #[test]
    fn test_count_and_presence() {
        let r = record(json!({"connectors": [{}, {}], "actions": "x", "model": ""}));
        assert_eq!(r.count(fields::CONNECTORS), 2);
        assert_eq!(r.count(fields::ACTIONS), 0);
        assert!(r.is_present(fields::CONNECTORS));
        assert!(!r.is_present(fields::MODEL));
        assert!(!r.is_present(fields::MCP_SERVERS));
    }
}
