//! Pure filtering of catalog records.
//!
//! Every criterion is optional. An absent or blank criterion matches every
//! record, and criteria combine with logical AND. Raw input that cannot be
//! coerced to the expected type (a non-numeric quantity) is treated as unset.

use crate::entities::{CatalogEntity, Record};
use crate::macros::setter;

#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub name_substring: Option<String>,
    pub exact_quantity: Option<u32>,
    pub category_name: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    setter!(opt name_substring: String);
    setter!(opt exact_quantity: u32);
    setter!(opt category_name: String);

    /// Build criteria from untrusted input strings as typed by the user
    pub fn from_raw(name: &str, quantity: &str, category: &str) -> Self {
        Self {
            name_substring: non_blank(name),
            exact_quantity: quantity.trim().parse().ok(),
            category_name: non_blank(category),
        }
    }

    /// True when no criterion constrains anything
    pub fn is_empty(&self) -> bool {
        active(&self.name_substring).is_none()
            && self.exact_quantity.is_none()
            && active(&self.category_name).is_none()
    }

    pub fn matches<E: CatalogEntity>(&self, entity: &E) -> bool {
        let name_match = active(&self.name_substring)
            .is_none_or(|needle| contains_ignore_case(entity.name(), needle));
        let quantity_match = self.exact_quantity.is_none_or(|q| entity.amount() == q);
        // Entities without a category ignore the category criterion
        let category_match = match (active(&self.category_name), entity.category()) {
            (Some(wanted), Some(category)) => equals_ignore_case(category, wanted),
            _ => true,
        };
        name_match && quantity_match && category_match
    }
}

/// Stable filter: the matching records in their original relative order
pub fn filter<'a, E, I>(entities: I, criteria: &FilterCriteria) -> Vec<&'a Record<E>>
where
    E: CatalogEntity + 'a,
    I: IntoIterator<Item = &'a Record<E>>,
{
    entities
        .into_iter()
        .filter(|record| criteria.matches(&record.entity))
        .collect()
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn equals_ignore_case(value: &str, wanted: &str) -> bool {
    value.trim().to_lowercase() == wanted.to_lowercase()
}
