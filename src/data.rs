// src/data.rs

use crate::catalog::Catalog;
use crate::config::MAX_LEVEL;
use crate::error::CatalogError;

/// Carga el catálogo de tiendas desde el YAML embebido
pub fn read_catalog_embedded() -> Result<Catalog, CatalogError> {
    let file_content = include_str!("data/catalog.yaml");
    Catalog::from_yaml(file_content, MAX_LEVEL)
}
