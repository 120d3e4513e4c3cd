//! The set of categories available for selection.

use impostor_core::error::GameError;
use tracing::info;

use crate::category::Category;

/// YAML source of the built-in categories, embedded at compile time.
const BUILTIN_CATEGORIES: &str = include_str!("../assets/categories.yaml");

/// Ordered set of available categories.
///
/// Categories are only ever appended; dropping one happens by process
/// teardown, never by mutation.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl CategoryCatalog {
    /// Creates a catalog from already-validated categories.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Validation` if any category is malformed or
    /// two categories share an id.
    pub fn new(categories: Vec<Category>) -> Result<Self, GameError> {
        let mut catalog = Self { categories: Vec::new() };
        for category in categories {
            catalog.append(category)?;
        }
        Ok(catalog)
    }

    /// Loads the built-in category set shipped with the game.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Infrastructure` if the embedded YAML fails to
    /// parse, or `GameError::Validation` if it violates category invariants.
    pub fn builtin() -> Result<Self, GameError> {
        let categories: Vec<Category> = serde_yaml::from_str(BUILTIN_CATEGORIES)
            .map_err(|e| GameError::Infrastructure(format!("built-in categories failed to parse: {e}")))?;
        let catalog = Self::new(categories)?;
        info!(count = catalog.categories.len(), "loaded built-in categories");
        Ok(catalog)
    }

    /// Looks up a category by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Appends a category after validating it.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Validation` if the category is malformed or its
    /// id collides with an existing entry. On error the catalog is
    /// untouched — no partial category ever enters the set.
    pub fn append(&mut self, category: Category) -> Result<(), GameError> {
        category.validate()?;
        if self.find(&category.id).is_some() {
            return Err(GameError::Validation(format!(
                "duplicate category id: {}",
                category.id
            )));
        }
        self.categories.push(category);
        Ok(())
    }

    /// All categories, in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Category] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(id: &str) -> Category {
        Category {
            id: id.to_owned(),
            name: "Custom".to_owned(),
            words: vec!["Pizza".to_owned()],
            is_custom: true,
        }
    }

    #[test]
    fn test_builtin_catalog_loads_seven_categories() {
        let catalog = CategoryCatalog::builtin().unwrap();

        assert_eq!(catalog.all().len(), 7);
        assert!(catalog.all().iter().all(|c| !c.is_custom));
        assert!(catalog.all().iter().all(|c| c.validate().is_ok()));
    }

    #[test]
    fn test_builtin_catalog_resolves_known_ids() {
        let catalog = CategoryCatalog::builtin().unwrap();

        let food = catalog.find("default-food").unwrap();
        assert_eq!(food.name, "Comida (Español)");
        assert!(food.words.contains(&"Pizza".to_owned()));

        assert!(catalog.find("nope").is_none());
    }

    #[test]
    fn test_append_adds_generated_category() {
        let mut catalog = CategoryCatalog::builtin().unwrap();

        catalog.append(custom("gen-1")).unwrap();

        assert_eq!(catalog.all().len(), 8);
        assert!(catalog.find("gen-1").is_some());
    }

    #[test]
    fn test_append_rejects_duplicate_id() {
        let mut catalog = CategoryCatalog::builtin().unwrap();
        catalog.append(custom("gen-1")).unwrap();

        let result = catalog.append(custom("gen-1"));

        assert!(matches!(result, Err(GameError::Validation(_))));
        assert_eq!(catalog.all().len(), 8);
    }

    #[test]
    fn test_append_rejects_invalid_category_without_mutating() {
        let mut catalog = CategoryCatalog::builtin().unwrap();
        let mut bad = custom("gen-2");
        bad.words.clear();

        let result = catalog.append(bad);

        assert!(matches!(result, Err(GameError::Validation(_))));
        assert_eq!(catalog.all().len(), 7);
    }
}
