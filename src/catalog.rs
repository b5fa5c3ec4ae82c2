use serde::Deserialize;

const CATALOG_JSON: &str = include_str!("data/catalog.json");

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    Hero,
    Collection,
    Custom,
    Story,
    Contact,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SlideInfo {
    pub id: String,
    pub label: String,
    pub kind: SlideKind,
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Piece {
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub price: Option<String>,
    pub image: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Catalog {
    pub slides: Vec<SlideInfo>,
    pub pieces: Vec<Piece>,
}

impl Catalog {
    pub fn pieces_in<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Piece> + 'a {
        self.pieces.iter().filter(move |piece| piece.category == category)
    }
}

pub fn load() -> Result<Catalog, serde_json::Error> {
    serde_json::from_str(CATALOG_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_parses() {
        let catalog = load().expect("catalog.json should parse");
        assert_eq!(catalog.slides.first().map(|s| s.kind), Some(SlideKind::Hero));
        assert!(catalog.slides.iter().any(|s| s.kind == SlideKind::Custom));
        assert_eq!(catalog.slides.last().map(|s| s.kind), Some(SlideKind::Contact));
    }

    #[test]
    fn every_collection_slide_has_pieces() {
        let catalog = load().expect("catalog.json should parse");
        for slide in catalog.slides.iter().filter(|s| s.kind == SlideKind::Collection) {
            let category = slide.category.as_deref().expect("collection slides name a category");
            assert!(catalog.pieces_in(category).count() > 0, "{} is empty", slide.id);
        }
    }

    #[test]
    fn price_is_optional() {
        let catalog = load().expect("catalog.json should parse");
        let haar = catalog
            .pieces
            .iter()
            .find(|p| p.name == "Kundan Rani Haar")
            .expect("haar listed");
        assert_eq!(haar.price, None);
    }
}
