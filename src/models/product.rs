use serde::{Deserialize, Serialize};

/// Product as listed in the token form's dropdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub code: String,
}
