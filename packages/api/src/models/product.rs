use serde::{Deserialize, Serialize};

/// One product in the catalog. `attachment` is the server-side filename of
/// the uploaded brochure, when there is one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
}

/// Editable product fields, sent as the JSON part of the multipart body.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
}

/// A file picked in the browser, already read into memory.
#[derive(Clone, Debug)]
pub struct AttachmentUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_without_attachment_parses() {
        let product: Product =
            serde_json::from_str(r#"{"id":9,"name":"Sensor","description":"IoT"}"#).unwrap();
        assert_eq!(product.name, "Sensor");
        assert!(product.attachment.is_none());
    }

    #[test]
    fn test_attachment_filename_survives_round_trip() {
        let product: Product = serde_json::from_str(
            r#"{"id":9,"name":"Sensor","description":"IoT","attachment":"brochure.pdf"}"#,
        )
        .unwrap();
        assert_eq!(product.attachment.as_deref(), Some("brochure.pdf"));
    }
}
