//! The `cat` / `cattax` pairing.
//!
//! Category codes are only meaningful relative to the taxonomy that travels
//! next to them. Both fields live on the entity itself; this trait gives one
//! view over every entity that carries the pair.

use crate::context::{App, Content, Producer, Publisher, Restrictions, Site};
use crate::enums::CategoryTaxonomy;
use crate::media::{Ad, PartialAd};

pub trait Categorized {
    /// Category codes, empty when the list is absent.
    fn categories(&self) -> &[String];

    /// Taxonomy exactly as carried on the wire.
    fn cattax(&self) -> Option<CategoryTaxonomy>;

    /// Documented default when `cattax` is absent. Most entities have none.
    fn default_cattax(&self) -> Option<CategoryTaxonomy> {
        None
    }

    fn effective_cattax(&self) -> Option<CategoryTaxonomy> {
        self.cattax().or_else(|| self.default_cattax())
    }
}

/// Whether category codes of `a` and `b` can be compared with each other.
pub fn same_taxonomy(a: &impl Categorized, b: &impl Categorized) -> bool {
    match (a.effective_cattax(), b.effective_cattax()) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

macro_rules! categorized {
    ($ty:ty, $list:ident) => {
        categorized!($ty, $list, None);
    };
    ($ty:ty, $list:ident, $default:expr) => {
        impl Categorized for $ty {
            fn categories(&self) -> &[String] {
                self.$list.as_deref().unwrap_or(&[])
            }

            fn cattax(&self) -> Option<CategoryTaxonomy> {
                self.cattax
            }

            fn default_cattax(&self) -> Option<CategoryTaxonomy> {
                $default
            }
        }
    };
}

categorized!(Site, cat);
categorized!(App, cat);
categorized!(Publisher, cat);
categorized!(Content, cat);
categorized!(Producer, cat);
categorized!(Ad, cat, Some(CategoryTaxonomy::DEFAULT));
categorized!(PartialAd, cat, Some(CategoryTaxonomy::DEFAULT));
categorized!(Restrictions, bcat, Some(CategoryTaxonomy::DEFAULT));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_only_where_documented() {
        let site = Site::default();
        assert_eq!(site.effective_cattax(), None);
        assert!(site.categories().is_empty());

        let restrictions = Restrictions::default();
        assert_eq!(restrictions.cattax(), None);
        assert_eq!(
            restrictions.effective_cattax(),
            Some(CategoryTaxonomy::ContentTaxonomy2_0)
        );
    }

    #[test]
    fn test_explicit_cattax_wins() {
        let restrictions = Restrictions {
            bcat: Some(vec!["IAB25".into()]),
            cattax: Some(CategoryTaxonomy::ContentTaxonomy3_0),
            ..Default::default()
        };
        assert_eq!(restrictions.categories(), ["IAB25".to_string()]);
        assert_eq!(
            restrictions.effective_cattax(),
            Some(CategoryTaxonomy::ContentTaxonomy3_0)
        );
    }

    #[test]
    fn test_same_taxonomy() {
        let publisher = Publisher {
            cat: Some(vec!["IAB1".into()]),
            cattax: Some(CategoryTaxonomy::ContentTaxonomy2_0),
            ..Default::default()
        };
        let restrictions = Restrictions::default();
        assert!(same_taxonomy(&publisher, &restrictions));

        // No cattax and no documented default: nothing to compare against.
        assert!(!same_taxonomy(&Site::default(), &restrictions));
    }
}
