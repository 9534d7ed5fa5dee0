use serde::ser::{Serialize, SerializeMap, Serializer};

/// One selection made during the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub key: String,
    pub value: String,
}

impl Answer {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

// Serialized as `{ "KEY": "value" }`
impl Serialize for Answer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.value)?;
        map.end()
    }
}

/// Ordered, append-only record of the session's selections
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct AnswerLog {
    entries: Vec<Answer>,
}

impl AnswerLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, answer: Answer) {
        self.entries.push(answer);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Answer> {
        self.entries.iter()
    }

    pub fn values(&self) -> Vec<&str> {
        self.entries.iter().map(|a| a.value.as_str()).collect()
    }

    /// Pretty JSON summary, one single-key object per answer
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| format!("{:?}", self.values()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_insertion_order_and_duplicates() {
        let mut log = AnswerLog::new();
        log.push(Answer::new("A", "x"));
        log.push(Answer::new("B", "y"));
        log.push(Answer::new("C", "x"));

        assert_eq!(log.len(), 3);
        assert_eq!(log.values(), vec!["x", "y", "x"]);
    }

    #[test]
    fn test_json_summary_shape() {
        let mut log = AnswerLog::new();
        log.push(Answer::new("PROJECT_TYPE", "SaaS skeleton project"));
        log.push(Answer::new("PAYMENT_PROCESSOR", "Stripe"));

        let value: serde_json::Value = serde_json::from_str(&log.to_pretty_json()).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "PROJECT_TYPE": "SaaS skeleton project" },
                { "PAYMENT_PROCESSOR": "Stripe" }
            ])
        );
    }
}
