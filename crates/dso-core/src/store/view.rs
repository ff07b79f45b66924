use serde::Deserialize;
use serde_json::Value;

/// Response of a (grouped) view query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewResponse {
    pub rows: Vec<ViewRow>,
}

/// One row of a view. With `group=true` the key is the group key, e.g.
/// `["concept"]` or `["annotation", "python"]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewRow {
    pub key: Value,
    pub value: Value,
}

impl ViewRow {
    /// First element of an array key.
    pub fn group(&self) -> Option<&str> {
        self.key.as_array()?.first()?.as_str()
    }
}

impl ViewResponse {
    /// Value of the first row whose key starts with `group`, as a count.
    pub fn count_for(&self, group: &str) -> Option<u64> {
        self.rows
            .iter()
            .find(|row| row.group() == Some(group))
            .and_then(|row| row.value.as_u64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_count_for_group() {
        let response: ViewResponse = serde_json::from_value(json!({
            "rows": [
                { "key": ["annotation", "python"], "value": 412 },
                { "key": ["concept"], "value": 187 },
                { "key": ["concept", "extra"], "value": 3 }
            ]
        }))
        .unwrap();
        assert_eq!(response.count_for("concept"), Some(187));
        assert_eq!(response.count_for("annotation"), Some(412));
    }

    #[test]
    fn test_missing_group() {
        let response: ViewResponse =
            serde_json::from_value(json!({ "rows": [{ "key": "concept", "value": 1 }] })).unwrap();
        // Scalar keys are not group keys
        assert_eq!(response.count_for("concept"), None);
    }
}
