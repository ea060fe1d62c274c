use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/ingredients`.
///
/// When `recipe_id` is present the new ingredient is linked to that recipe in
/// the same transaction as the insert.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIngredientRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub recipe_id: Option<i64>,
}

/// Response of `POST /api/ingredients` and element of `GET /api/ingredients`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientView {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_reads_recipe_id_in_camel_case() {
        let req: CreateIngredientRequest =
            serde_json::from_str(r#"{"name":"Salt","recipeId":1}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("Salt"));
        assert_eq!(req.recipe_id, Some(1));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let req: CreateIngredientRequest =
            serde_json::from_str(r#"{"name":"Salt","quantity":"1 tsp"}"#).unwrap();
        assert_eq!(req.name.as_deref(), Some("Salt"));
        assert!(req.recipe_id.is_none());
    }
}
