use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Sentinel filter value meaning "no filter".
pub const ALL: &str = "all";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogFilterRequest {
    #[serde(default = "default_filter")]
    pub gender: String,

    #[serde(default = "default_filter")]
    pub category: String,
}

fn default_filter() -> String {
    ALL.to_string()
}

impl CatalogFilterRequest {
    pub fn gender_filter(&self) -> Option<&str> {
        (self.gender != ALL).then_some(self.gender.as_str())
    }

    pub fn category_filter(&self) -> Option<&str> {
        (self.category != ALL).then_some(self.category.as_str())
    }
}

impl Default for CatalogFilterRequest {
    fn default() -> Self {
        Self {
            gender: default_filter(),
            category: default_filter(),
        }
    }
}
