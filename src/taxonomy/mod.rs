pub mod categories;

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::models::category::Category;

pub use categories::{sample_requests_for, REPAIR_CATEGORIES, SAMPLE_REQUESTS};

/// Fixed set of repair categories keyed by display name. Built once and only
/// read afterwards; iteration is always in name order.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: BTreeMap<String, Category>,
}

impl Taxonomy {
    pub fn from_definitions<'a, I, H>(definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, H)>,
        H: AsRef<[&'a str]>,
    {
        let mut categories = BTreeMap::new();

        for (name, hints) in definitions {
            let name = name.trim();
            if name.is_empty() {
                return Err(Error::Taxonomy("category name is empty".to_string()));
            }

            let category = Category::new(name, hints.as_ref());
            if categories.insert(name.to_string(), category).is_some() {
                return Err(Error::Taxonomy(format!("duplicate category: {}", name)));
            }
        }

        if categories.is_empty() {
            return Err(Error::Taxonomy("taxonomy has no categories".to_string()));
        }

        Ok(Self { categories })
    }

    /// The built-in auto-repair taxonomy.
    pub fn repair() -> Self {
        let categories = REPAIR_CATEGORIES
            .iter()
            .map(|(name, hints)| (name.to_string(), Category::new(*name, hints)))
            .collect();

        Self { categories }
    }

    pub fn is_valid_category(&self, name: &str) -> bool {
        self.categories.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::repair()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repair_taxonomy() {
        let taxonomy = Taxonomy::repair();
        assert_eq!(taxonomy.len(), 15);
        assert!(taxonomy.is_valid_category("Рулевой механизм"));
        assert!(taxonomy.is_valid_category("Ремонт/замена двигателя и навесного"));
        assert!(!taxonomy.is_valid_category("Мотор"));
        assert!(!taxonomy.is_valid_category("рулевой механизм"));
    }

    #[test]
    fn test_keys_match_names() {
        let taxonomy = Taxonomy::repair();
        for name in taxonomy.category_names() {
            assert_eq!(taxonomy.get(name).unwrap().name, name);
        }
    }

    #[test]
    fn test_names_are_sorted() {
        let taxonomy = Taxonomy::repair();
        let names: Vec<_> = taxonomy.category_names().collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_hints_preserved() {
        let taxonomy = Taxonomy::repair();
        let steering = taxonomy.get("Рулевой механизм").unwrap();
        assert_eq!(
            steering.hints,
            vec!["руль", "рулевая рейка", "гур", "гидроусилитель"]
        );
    }

    #[test]
    fn test_from_definitions() {
        let taxonomy = Taxonomy::from_definitions([
            ("Ремонт стекол", vec!["стекло"]),
            ("Чип тюнинг", vec![]),
        ])
        .unwrap();

        assert_eq!(taxonomy.len(), 2);
        assert_eq!(
            taxonomy.category_names().collect::<Vec<_>>(),
            vec!["Ремонт стекол", "Чип тюнинг"]
        );
    }

    #[test]
    fn test_from_definitions_rejects_empty() {
        let empty: Vec<(&str, Vec<&str>)> = Vec::new();
        assert!(matches!(
            Taxonomy::from_definitions(empty),
            Err(Error::Taxonomy(_))
        ));
    }

    #[test]
    fn test_from_definitions_rejects_duplicates() {
        let result = Taxonomy::from_definitions([
            ("Чип тюнинг", vec!["чип"]),
            ("Чип тюнинг", vec!["прошивка"]),
        ]);
        assert!(matches!(result, Err(Error::Taxonomy(_))));
    }
}
