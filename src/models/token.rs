use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::value_to_short_string;

/// Reference to the product a token belongs to, serialized as `{"id": ..}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: i64,
}

/// A token record as exchanged with the backend.
///
/// The product relationship travels under the `token` key, which is the
/// relationship name the backend uses.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub client_account_name: String,
    #[serde(default, deserialize_with = "string_or_number", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svc_start: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(rename = "token", default, skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductRef>,
}

impl Token {
    pub fn product_id(&self) -> Option<i64> {
        self.product.map(|p| p.id)
    }
}

// clientId is numeric on some backends and a string on others.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .map(|v| value_to_short_string(&v))
        .filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_reference_uses_token_key() {
        let token = Token {
            client_account_name: "acme".into(),
            product: Some(ProductRef { id: 3 }),
            ..Default::default()
        };
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["token"]["id"], 3);
        assert_eq!(json["clientAccountName"], "acme");
        assert!(json.get("id").is_none());
        assert!(json.get("iin").is_none());
    }

    #[test]
    fn test_numeric_client_id_is_read_as_string() {
        let token: Token = serde_json::from_str(
            r#"{"id":7,"clientAccountName":"acme","clientId":42,"type":"VISA","token":{"id":1}}"#,
        )
        .unwrap();
        assert_eq!(token.client_id.as_deref(), Some("42"));
        assert_eq!(token.token_type.as_deref(), Some("VISA"));
        assert_eq!(token.product_id(), Some(1));
    }

    #[test]
    fn test_null_fields_are_absent() {
        let token: Token =
            serde_json::from_str(r#"{"id":1,"clientAccountName":"a","clientId":null,"token":null}"#).unwrap();
        assert_eq!(token.client_id, None);
        assert_eq!(token.product, None);
    }
}
