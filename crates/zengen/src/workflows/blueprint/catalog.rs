use serde::Serialize;

/// Heading group a catalog item is listed under on the resources page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSection {
    GoldStandardStack,
    EssentialIngredients,
}

impl CatalogSection {
    pub const fn ordered() -> [Self; 2] {
        [Self::GoldStandardStack, Self::EssentialIngredients]
    }

    pub const fn heading(self) -> &'static str {
        match self {
            Self::GoldStandardStack => "The Gold Standard Stack",
            Self::EssentialIngredients => "Essential Ingredients (Amazon Global)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogItemKey {
    Matcha,
    Nmn,
    RiceCooker,
    MisoSeaweed,
    Omega3,
}

impl CatalogItemKey {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Matcha,
            Self::Nmn,
            Self::RiceCooker,
            Self::MisoSeaweed,
            Self::Omega3,
        ]
    }

    /// Suffix used by the `APP_LINK_*` overrides.
    pub const fn env_suffix(self) -> &'static str {
        match self {
            Self::Matcha => "MATCHA",
            Self::Nmn => "NMN",
            Self::RiceCooker => "RICE_COOKER",
            Self::MisoSeaweed => "MISO_SEAWEED",
            Self::Omega3 => "OMEGA3",
        }
    }
}

/// Recommended product with its outbound reference link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub key: CatalogItemKey,
    pub section: CatalogSection,
    pub name: &'static str,
    pub url: String,
    pub rationale: &'static str,
}

/// The five recommended items printed on the resources page. The same
/// catalog is used for every score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    pub fn standard() -> Self {
        let items = CatalogItemKey::ordered()
            .into_iter()
            .map(standard_item)
            .collect();
        Self { items }
    }

    pub fn with_link(mut self, key: CatalogItemKey, url: impl Into<String>) -> Self {
        if let Some(item) = self.items.iter_mut().find(|item| item.key == key) {
            item.url = url.into();
        }
        self
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn in_section(&self, section: CatalogSection) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter().filter(move |item| item.section == section)
    }

    pub fn link_for(&self, key: CatalogItemKey) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.key == key)
            .map(|item| item.url.as_str())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn standard_item(key: CatalogItemKey) -> CatalogItem {
    let (section, name, url, rationale) = match key {
        CatalogItemKey::Matcha => (
            CatalogSection::GoldStandardStack,
            "Ippodo Matcha",
            "https://amzn.to/3OqrkJE",
            "The world's finest L-Theanine source for neuro-protection.",
        ),
        CatalogItemKey::Nmn => (
            CatalogSection::GoldStandardStack,
            "Suntory NMN",
            "https://www.amazon.com/s?k=japanese+nmn",
            "99.9% purity for DNA repair and cellular energy.",
        ),
        CatalogItemKey::RiceCooker => (
            CatalogSection::GoldStandardStack,
            "Zojirushi IH Cooker",
            "https://amzn.to/3Oq6KZZ",
            "The foundation of a healthy metabolism. GABA activation mode.",
        ),
        CatalogItemKey::MisoSeaweed => (
            CatalogSection::EssentialIngredients,
            "Premium Miso & Seaweed",
            "https://amzn.to/3MmatHs",
            "Organic Dried Seaweed, Traditional Pickles, Aged Miso.",
        ),
        CatalogItemKey::Omega3 => (
            CatalogSection::EssentialIngredients,
            "EPA/DHA Fish Oil",
            "https://www.amazon.com/s?k=japanese+epa+dha+fish+oil",
            "Marine Omega-3 to close the gap when fish intake is low.",
        ),
    };

    CatalogItem {
        key,
        section,
        name,
        url: url.to_string(),
        rationale,
    }
}
