use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub slug: String,
    pub name_ar: String,
    pub name_en: String,
    pub name_ur: String,
    #[serde(default)]
    pub article_count: i64,
}

impl Category {
    pub fn name_for(&self, locale: crate::models::Locale) -> &str {
        match locale {
            crate::models::Locale::Ar => &self.name_ar,
            crate::models::Locale::En => &self.name_en,
            crate::models::Locale::Ur => &self.name_ur,
        }
    }
}
