//! Catálogo de solo lectura: tiendas y productos en el orden en que se declaran.

use crate::error::{CatalogError, ValidationError};
use crate::model::{ItemDefinition, ShopDefinition, ShopId};
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Catalog {
    pub shops: Vec<ShopDefinition>,
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
}

impl Catalog {
    /// Parsea el YAML y lo valida contra `max_level`.
    pub fn from_yaml(source: &str, max_level: u32) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(source)?;
        let problems = catalog.validate(max_level);
        if problems.is_empty() {
            log::debug!(
                "catalog loaded: {} shops, {} items",
                catalog.shops.len(),
                catalog.items.len()
            );
            Ok(catalog)
        } else {
            Err(CatalogError::Invalid(problems))
        }
    }

    /// Devuelve todos los problemas encontrados; vacío si el catálogo es válido.
    pub fn validate(&self, max_level: u32) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let mut shop_ids = HashSet::new();
        for shop in &self.shops {
            if !shop_ids.insert(shop.id) {
                errors.push(ValidationError::DuplicateShop(shop.id));
            }
            if !(1..=max_level).contains(&shop.unlock_level) {
                errors.push(ValidationError::LevelOutOfRange {
                    shop_id: shop.id,
                    level: shop.unlock_level,
                    max_level,
                });
            }
        }

        let mut seen_items: HashSet<(ShopId, &str)> = HashSet::new();
        for item in &self.items {
            if !shop_ids.contains(&item.shop_id) {
                errors.push(ValidationError::UnknownShop {
                    item: item.name.clone(),
                    shop_id: item.shop_id,
                });
            }
            if item.accepted_answers.is_empty() {
                errors.push(ValidationError::NoAcceptedAnswers {
                    item: item.name.clone(),
                    shop_id: item.shop_id,
                });
            }
            if !seen_items.insert((item.shop_id, item.name.as_str())) {
                errors.push(ValidationError::DuplicateItem {
                    item: item.name.clone(),
                    shop_id: item.shop_id,
                });
            }
        }

        errors
    }

    pub fn shop(&self, id: ShopId) -> Option<&ShopDefinition> {
        self.shops.iter().find(|s| s.id == id)
    }

    pub fn shops_for_level(&self, level: u32) -> Vec<&ShopDefinition> {
        self.shops
            .iter()
            .filter(|s| s.unlock_level == level)
            .collect()
    }

    pub fn items_for_shop(&self, shop_id: ShopId) -> Vec<&ItemDefinition> {
        self.items.iter().filter(|i| i.shop_id == shop_id).collect()
    }

    pub fn item(&self, shop_id: ShopId, name: &str) -> Option<&ItemDefinition> {
        self.items
            .iter()
            .find(|i| i.shop_id == shop_id && i.name == name)
    }
}
