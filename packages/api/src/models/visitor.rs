use serde::{Deserialize, Serialize};

use super::{Exhibition, Product};

/// A lead captured at an exhibition, either through the public registration
/// form or the admin console.
///
/// Only name, email, phone, company and the exhibition link are required;
/// the profiling fields are whatever the visitor chose to share. Multi-select
/// answers travel as string arrays, each with a free-text "other" companion
/// where the form offers one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_state: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub company_type: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_type_other: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub industry: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_other: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub company_size: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interest_areas: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub solutions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solutions_other: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timeline: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub budget: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub follow_up_mode: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub best_time_to_contact: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
    #[serde(default)]
    pub consent: bool,
    pub exhibition_id: i64,
    #[serde(default)]
    pub product_ids: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exhibition: Option<Exhibition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visitor_products: Vec<VisitorProduct>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Join row tying a visitor to one product of interest.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisitorProduct {
    pub id: i64,
    pub product: Product,
}

/// Response to a visitor create. `email_sent` reports whether the follow-up
/// confirmation mail went out; a failure there is non-fatal.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorCreateResponse {
    pub visitor: Visitor,
    #[serde(default)]
    pub email_sent: bool,
    #[serde(default)]
    pub email_error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_visitor_serializes_without_profiling_noise() {
        let visitor = Visitor {
            name: "Priya".to_string(),
            email: "priya@corp.test".to_string(),
            phone: "98765".to_string(),
            company_name: "Corp".to_string(),
            consent: true,
            exhibition_id: 2,
            product_ids: vec![5, 7],
            ..Default::default()
        };
        let out = serde_json::to_value(&visitor).unwrap();
        assert_eq!(out["companyName"], "Corp");
        assert_eq!(out["exhibitionId"], 2);
        assert_eq!(out["productIds"], serde_json::json!([5, 7]));
        assert!(out.get("industry").is_none());
        assert!(out.get("visitorProducts").is_none());
    }

    #[test]
    fn test_server_visitor_with_joins_parses() {
        let json = r#"{
            "id": 31,
            "name": "Priya",
            "email": "priya@corp.test",
            "phone": "98765",
            "companyName": "Corp",
            "industry": ["Manufacturing"],
            "consent": true,
            "exhibitionId": 2,
            "productIds": [5],
            "visitorProducts": [
                {"id": 1, "product": {"id": 5, "name": "Sensor", "description": ""}}
            ],
            "createdAt": "2025-03-01T10:00:00Z"
        }"#;
        let visitor: Visitor = serde_json::from_str(json).unwrap();
        assert_eq!(visitor.visitor_products.len(), 1);
        assert_eq!(visitor.visitor_products[0].product.name, "Sensor");
        assert_eq!(visitor.industry, vec!["Manufacturing"]);
    }

    #[test]
    fn test_create_response_defaults_email_fields() {
        let json = r#"{"visitor": {"name":"A","email":"a@b.c","phone":"1","exhibitionId":2}}"#;
        let resp: VisitorCreateResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.email_sent);
        assert!(resp.email_error.is_none());
    }

    #[test]
    fn test_email_failure_is_reported() {
        let json = r#"{
            "visitor": {"name":"A","email":"a@b.c","phone":"1","exhibitionId":2},
            "emailSent": false,
            "emailError": "SMTP relay refused"
        }"#;
        let resp: VisitorCreateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.email_error.as_deref(), Some("SMTP relay refused"));
    }
}
