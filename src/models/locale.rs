use serde::{Deserialize, Serialize};

/// Publication locale. Arabic is the canonical edition and lives at the bare
/// root; English and Urdu live under their own path prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
    Ur,
}

impl Locale {
    /// Locale implied by a pathname. Prefixes match on segment boundaries,
    /// so `/energy` is still the Arabic edition.
    pub fn from_path(pathname: &str) -> Locale {
        if pathname == "/en" || pathname.starts_with("/en/") {
            Locale::En
        } else if pathname == "/ur" || pathname.starts_with("/ur/") {
            Locale::Ur
        } else {
            Locale::Ar
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
            Locale::Ur => "ur",
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(&self) -> &'static str {
        match self {
            Locale::En => "ltr",
            Locale::Ar | Locale::Ur => "rtl",
        }
    }

    pub fn home_path(&self) -> &'static str {
        match self {
            Locale::Ar => "/",
            Locale::En => "/en",
            Locale::Ur => "/ur",
        }
    }

    /// Reader route for one article, under this locale's prefix.
    pub fn article_path(&self, slug: &str) -> String {
        match self {
            Locale::Ar => format!("/article/{slug}"),
            Locale::En => format!("/en/article/{slug}"),
            Locale::Ur => format!("/ur/article/{slug}"),
        }
    }

    /// Reader route for one category listing, under this locale's prefix.
    pub fn category_path(&self, slug: &str) -> String {
        match self {
            Locale::Ar => format!("/category/{slug}"),
            Locale::En => format!("/en/category/{slug}"),
            Locale::Ur => format!("/ur/category/{slug}"),
        }
    }

    pub fn home_label(&self) -> &'static str {
        match self {
            Locale::Ar => "الرئيسية",
            Locale::En => "Home",
            Locale::Ur => "ہوم",
        }
    }
}
