use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Item entity as stored by the repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier, assigned by the repository
    pub id: i64,
    /// Item name
    pub name: String,
    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Writable item fields, accepted by create and replace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ItemData {
    #[validate(length(min = 1, max = 200))]
    #[schema(example = "widget", min_length = 1, max_length = 200)]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    #[schema(max_length = 2000)]
    pub description: Option<String>,
}

/// Item as returned to clients: the stored fields plus its absolute URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "widget")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Absolute URL of this item's fetch-by-id endpoint
    #[schema(example = "https://api.example.com/api/items/1")]
    pub url: String,
}

impl Item {
    /// Build a stored item from its id and writable fields
    pub fn new(id: i64, data: ItemData) -> Self {
        Self {
            id,
            name: data.name,
            description: data.description,
        }
    }

    /// Replace all writable fields, keeping the id
    pub fn replace(&mut self, data: ItemData) {
        self.name = data.name;
        self.description = data.description;
    }
}

impl ItemData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// `{base_route_url}/{id}`
pub fn item_url(base_route_url: &str, id: i64) -> String {
    format!("{}/{}", base_route_url.trim_end_matches('/'), id)
}

impl ItemResponse {
    pub fn from_item(item: Item, base_route_url: &str) -> Self {
        Self {
            url: item_url(base_route_url, item.id),
            id: item.id,
            name: item.name,
            description: item.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.example.com/api/items";

    #[test]
    fn test_response_url_points_at_fetch_endpoint() {
        let response = ItemResponse::from_item(Item::new(7, ItemData::new("widget")), BASE);
        assert_eq!(response.url, "https://api.example.com/api/items/7");
        assert_eq!(response.id, 7);
        assert_eq!(response.name, "widget");
    }

    #[test]
    fn test_item_url_ignores_trailing_slash_on_base() {
        assert_eq!(
            item_url("http://localhost:8080/api/items/", 3),
            "http://localhost:8080/api/items/3"
        );
    }

    #[test]
    fn test_response_omits_missing_description() {
        let response = ItemResponse::from_item(Item::new(1, ItemData::new("widget")), "...");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "widget", "url": ".../1"}));
    }

    #[test]
    fn test_replace_keeps_id() {
        let mut item = Item::new(4, ItemData::new("old").with_description("before"));
        item.replace(ItemData::new("new"));
        assert_eq!(item, Item::new(4, ItemData::new("new")));
    }

    #[test]
    fn test_item_data_validation() {
        assert!(ItemData::new("widget").validate().is_ok());
        assert!(ItemData::new("").validate().is_err());
        assert!(ItemData::new("x".repeat(201)).validate().is_err());
        assert!(
            ItemData::new("widget")
                .with_description("d".repeat(2001))
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_item_data_rejects_unknown_fields() {
        let result = serde_json::from_str::<ItemData>(r#"{"name":"widget","colour":"red"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_item_data_requires_name() {
        let result = serde_json::from_str::<ItemData>(r#"{"description":"no name"}"#);
        assert!(result.is_err());
    }
}
