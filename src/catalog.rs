//! Monster variant catalog.
//!
//! The catalog is declarative data loaded independently of the progression
//! state. The engine only exposes `level` and `is_boss()`; picking a variant
//! from those is done here.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const EMBEDDED_CATALOG: &str = include_str!("../assets/monsters.json");
const FALLBACK_GLYPH: &str = "👾";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid monster catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("monster catalog has no entries")]
    Empty,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterVariant {
    pub name: String,
    /// Asset reference for a 3D model; unused by the DOM renderer.
    pub glb: String,
    #[serde(default)]
    pub glyph: Option<String>,
    /// Inclusive `[min, max]` levels this variant appears on.
    #[serde(default)]
    pub level_range: Option<(u32, u32)>,
    #[serde(default)]
    pub is_boss: bool,
}

impl MonsterVariant {
    pub fn glyph(&self) -> &str {
        self.glyph.as_deref().unwrap_or(FALLBACK_GLYPH)
    }

    fn covers(&self, level: u32) -> bool {
        match self.level_range {
            Some((lo, hi)) => (lo..=hi).contains(&level),
            None => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterCatalog {
    pub models: Vec<MonsterVariant>,
}

impl MonsterCatalog {
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let catalog: MonsterCatalog = serde_json::from_str(raw)?;
        if catalog.models.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Picks the variant for an encounter. Boss levels take the first boss
    /// entry; other levels choose among matching non-boss entries using
    /// `roll` in `[0, 1)`.
    pub fn select_variant(&self, level: u32, is_boss: bool, roll: f64) -> Option<&MonsterVariant> {
        if is_boss {
            if let Some(boss) = self.models.iter().find(|m| m.is_boss) {
                return Some(boss);
            }
        }
        let regular: Vec<&MonsterVariant> = self.models.iter().filter(|m| !m.is_boss).collect();
        let in_range: Vec<&MonsterVariant> =
            regular.iter().copied().filter(|m| m.covers(level)).collect();
        let pool = if in_range.is_empty() { regular } else { in_range };
        if pool.is_empty() {
            return self.models.first();
        }
        let idx = ((roll.clamp(0.0, 1.0) * pool.len() as f64).floor() as usize).min(pool.len() - 1);
        Some(pool[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{"models": [
        {"name": "Slime", "glb": "/slime.glb", "levelRange": [1, 5]},
        {"name": "Orc", "glb": "/orc.glb", "glyph": "👹", "levelRange": [6, 9]},
        {"name": "Bat", "glb": "/bat.glb"},
        {"name": "Dragon", "glb": "/dragon.glb", "isBoss": true}
    ]}"#;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = MonsterCatalog::embedded().unwrap();
        assert!(catalog.models.iter().any(|m| m.is_boss));
    }

    #[test]
    fn test_boss_level_picks_boss() {
        let catalog = MonsterCatalog::from_json(SMALL).unwrap();
        let v = catalog.select_variant(10, true, 0.7).unwrap();
        assert_eq!(v.name, "Dragon");
    }

    #[test]
    fn test_regular_level_respects_ranges() {
        let catalog = MonsterCatalog::from_json(SMALL).unwrap();
        // Level 7: Orc and the unranged Bat.
        assert_eq!(catalog.select_variant(7, false, 0.0).unwrap().name, "Orc");
        assert_eq!(catalog.select_variant(7, false, 0.99).unwrap().name, "Bat");
        for roll in [0.0, 0.3, 0.6, 0.99] {
            assert_ne!(catalog.select_variant(3, false, roll).unwrap().name, "Dragon");
        }
    }

    #[test]
    fn test_out_of_range_level_falls_back_to_all_regular() {
        let raw = r#"{"models": [
            {"name": "Slime", "glb": "/slime.glb", "levelRange": [1, 5]},
            {"name": "Dragon", "glb": "/dragon.glb", "isBoss": true}
        ]}"#;
        let catalog = MonsterCatalog::from_json(raw).unwrap();
        assert_eq!(catalog.select_variant(50, false, 0.5).unwrap().name, "Slime");
    }

    #[test]
    fn test_boss_level_without_boss_entry() {
        let raw = r#"{"models": [{"name": "Slime", "glb": "/slime.glb"}]}"#;
        let catalog = MonsterCatalog::from_json(raw).unwrap();
        assert_eq!(catalog.select_variant(20, true, 0.5).unwrap().name, "Slime");
    }

    #[test]
    fn test_glyph_fallback() {
        let catalog = MonsterCatalog::from_json(SMALL).unwrap();
        assert_eq!(catalog.models[0].glyph(), FALLBACK_GLYPH);
        assert_eq!(catalog.models[1].glyph(), "👹");
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            MonsterCatalog::from_json(r#"{"models": []}"#),
            Err(CatalogError::Empty)
        ));
        let err = MonsterCatalog::from_json("not json").unwrap_err();
        assert!(err.to_string().contains("invalid monster catalog"));
    }
}
