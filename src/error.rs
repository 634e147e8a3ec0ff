//! Errores de carga del catálogo.

use crate::model::ShopId;
use thiserror::Error;

/// Un problema concreto encontrado al validar el catálogo.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("shop {shop_id} has unlock level {level}, expected 1..={max_level}")]
    LevelOutOfRange {
        shop_id: ShopId,
        level: u32,
        max_level: u32,
    },

    #[error("shop id {0} is declared more than once")]
    DuplicateShop(ShopId),

    #[error("item '{item}' references missing shop {shop_id}")]
    UnknownShop { item: String, shop_id: ShopId },

    #[error("item '{item}' in shop {shop_id} has no accepted answers")]
    NoAcceptedAnswers { item: String, shop_id: ShopId },

    #[error("item '{item}' appears more than once in shop {shop_id}")]
    DuplicateItem { item: String, shop_id: ShopId },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("catalog failed validation with {} problem(s): {}", .0.len(), first_problem(.0))]
    Invalid(Vec<ValidationError>),
}

fn first_problem(problems: &[ValidationError]) -> String {
    problems
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}
