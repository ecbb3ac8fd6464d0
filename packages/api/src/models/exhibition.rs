use serde::{Deserialize, Serialize};

/// One exhibition, as served and accepted by the backend. Dates are kept as
/// ISO strings since the client only displays and round-trips them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exhibition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<String>,
    #[serde(default)]
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhibition_wire_names_are_camel_case() {
        let json = r#"{
            "id": 1,
            "name": "Tech Expo",
            "location": "Hall A",
            "startDate": "2025-03-01",
            "endDate": "2025-03-03",
            "timing": "10:00-18:00",
            "active": true
        }"#;
        let exhibition: Exhibition = serde_json::from_str(json).unwrap();
        assert_eq!(exhibition.start_date, "2025-03-01");
        assert!(exhibition.active);

        let out = serde_json::to_value(&exhibition).unwrap();
        assert_eq!(out["endDate"], "2025-03-03");
    }

    #[test]
    fn test_new_exhibition_omits_id_on_the_wire() {
        let exhibition = Exhibition {
            name: "New".to_string(),
            location: "Hall B".to_string(),
            start_date: "2025-04-01".to_string(),
            end_date: "2025-04-02".to_string(),
            ..Default::default()
        };
        let out = serde_json::to_value(&exhibition).unwrap();
        assert!(out.get("id").is_none());
        assert!(out.get("timing").is_none());
    }
}
