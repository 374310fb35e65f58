use std::{fmt, slice::Iter};

use derive_more::{Deref, Display};
use log::debug;

use crate::catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipment {
    pub id: EquipmentID,
    pub name: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub safety: &'static [&'static str],
    pub image: &'static str,
}

#[derive(Deref, Display, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct EquipmentID(pub(crate) u32);

impl From<u32> for EquipmentID {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// All equipment of the gym in catalog order.
#[must_use]
pub fn equipment_list() -> &'static [Equipment] {
    &catalog::EQUIPMENT
}

#[must_use]
pub fn equipment(id: EquipmentID) -> Option<&'static Equipment> {
    catalog::EQUIPMENT.iter().find(|e| e.id == id)
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Category {
    Cardio,
    Strength,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 2] = [Category::Cardio, Category::Strength];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Cardio => "Кардио",
            Category::Strength => "Силовые",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum CategorySelection {
    #[default]
    All,
    Only(Category),
}

impl CategorySelection {
    /// "All" followed by every category present in the catalog, in order of first appearance.
    #[must_use]
    pub fn options() -> Vec<CategorySelection> {
        let mut options = vec![CategorySelection::All];
        for equipment in equipment_list() {
            let option = CategorySelection::Only(equipment.category);
            if !options.contains(&option) {
                options.push(option);
            }
        }
        options
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CategorySelection::All => "Все",
            CategorySelection::Only(category) => category.name(),
        }
    }

    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(selected) => selected == category,
        }
    }
}

impl From<Category> for CategorySelection {
    fn from(value: Category) -> Self {
        CategorySelection::Only(value)
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CatalogFilter {
    selection: CategorySelection,
}

impl CatalogFilter {
    pub fn select_category(&mut self, selection: CategorySelection) {
        debug!("select category {selection}");
        self.selection = selection;
    }

    #[must_use]
    pub fn filtered_view(&self) -> Vec<&'static Equipment> {
        self.equipment(equipment_list().iter())
    }

    #[must_use]
    pub fn equipment<'a>(
        &self,
        equipment: impl Iterator<Item = &'a Equipment>,
    ) -> Vec<&'a Equipment> {
        equipment
            .filter(|e| self.selection.matches(e.category))
            .collect()
    }

    #[must_use]
    pub fn options(&self) -> Vec<(CategorySelection, bool)> {
        CategorySelection::options()
            .into_iter()
            .map(|o| (o, o == self.selection))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn ids(equipment: &[&Equipment]) -> Vec<u32> {
        equipment.iter().map(|e| *e.id).collect()
    }

    #[test]
    fn test_catalog_filter_default() {
        let filter = CatalogFilter::default();

        assert_eq!(filter, CatalogFilter::default());
        assert_eq!(filter.options()[0], (CategorySelection::All, true));
        assert_eq!(filter.filtered_view().len(), equipment_list().len());
    }

    #[rstest]
    #[case::all(CategorySelection::All, &[1, 2, 3, 4, 5, 6])]
    #[case::cardio(CategorySelection::Only(Category::Cardio), &[1, 3, 5])]
    #[case::strength(CategorySelection::Only(Category::Strength), &[2, 4, 6])]
    fn test_catalog_filter_filtered_view(
        #[case] selection: CategorySelection,
        #[case] expected: &[u32],
    ) {
        let mut filter = CatalogFilter::default();
        filter.select_category(selection);

        assert_eq!(ids(&filter.filtered_view()), expected);
    }

    #[test]
    fn test_catalog_filter_cardio_names() {
        let mut filter = CatalogFilter::default();
        filter.select_category(Category::Cardio.into());

        assert_eq!(
            filter
                .filtered_view()
                .iter()
                .map(|e| e.name)
                .collect::<Vec<_>>(),
            vec!["Беговая дорожка", "Велотренажер", "Эллиптический тренажер"]
        );
    }

    #[test]
    fn test_catalog_filter_closure_and_completeness() {
        for selection in CategorySelection::options() {
            let mut filter = CatalogFilter::default();
            filter.select_category(selection);
            let view = filter.filtered_view();

            for e in &view {
                assert!(equipment_list().contains(e));
                assert!(selection.matches(e.category));
            }

            let expected = equipment_list()
                .iter()
                .filter(|e| selection.matches(e.category))
                .collect::<Vec<_>>();
            assert_eq!(view, expected);
        }
    }

    #[test]
    fn test_catalog_filter_reselect() {
        let mut filter = CatalogFilter::default();
        filter.select_category(Category::Strength.into());
        filter.select_category(CategorySelection::All);

        assert_eq!(filter, CatalogFilter::default());
        assert_eq!(ids(&filter.filtered_view()), [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_catalog_filter_equipment() {
        let equipment = equipment_list().iter().rev().collect::<Vec<_>>();
        let mut filter = CatalogFilter::default();
        filter.select_category(Category::Cardio.into());

        assert_eq!(ids(&filter.equipment(equipment.into_iter())), [5, 3, 1]);
    }

    #[test]
    fn test_catalog_filter_options() {
        let mut filter = CatalogFilter::default();
        filter.select_category(Category::Strength.into());

        assert_eq!(
            filter.options(),
            vec![
                (CategorySelection::All, false),
                (CategorySelection::Only(Category::Cardio), false),
                (CategorySelection::Only(Category::Strength), true),
            ]
        );
    }

    #[test]
    fn test_category_selection_options_cover_catalog() {
        let options = CategorySelection::options();

        assert_eq!(options[0], CategorySelection::All);
        for category in Category::iter() {
            assert!(options.contains(&CategorySelection::Only(*category)));
        }
    }

    #[rstest]
    #[case(CategorySelection::All, "Все")]
    #[case(CategorySelection::Only(Category::Cardio), "Кардио")]
    #[case(CategorySelection::Only(Category::Strength), "Силовые")]
    fn test_category_selection_display(
        #[case] selection: CategorySelection,
        #[case] expected: &str,
    ) {
        assert_eq!(selection.to_string(), expected);
    }

    #[rstest]
    #[case(1, Some("Беговая дорожка"))]
    #[case(6, Some("Скамья для жима"))]
    #[case(7, None)]
    fn test_equipment(#[case] id: u32, #[case] expected: Option<&str>) {
        assert_eq!(equipment(id.into()).map(|e| e.name), expected);
    }
}
