//! List operation - what the dist store contains.

use std::path::Path;

use pictor_core::{Diagnostics, IconCatalog};

use crate::{ops::load_catalog, reports::ListReport};

pub fn list(dist_dir: &Path) -> ListReport {
    let mut diagnostics = Diagnostics::new();
    let catalog = load_catalog(dist_dir, &mut diagnostics);

    ListReport {
        names: catalog.name_index(),
        sizes: size_counts(&catalog),
        diagnostics,
    }
}

/// `(size, icon count)` in ascending numeric size order.
fn size_counts(catalog: &IconCatalog) -> Vec<(String, usize)> {
    catalog
        .by_size()
        .into_iter()
        .map(|(size, icons)| (size.to_string(), icons.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use pictor_ir::{Icon, IconKey, SizeToken};

    use super::*;

    fn icon(size: &str, name: &str) -> Icon {
        Icon::new(IconKey::new(SizeToken::new(size).unwrap(), name), "X", vec![], "")
    }

    #[test]
    fn test_size_counts_numeric_order() {
        let catalog = IconCatalog::from_icons([
            icon("16", "a"),
            icon("8", "a"),
            icon("16", "b"),
            icon("128", "a"),
        ]);
        assert_eq!(
            size_counts(&catalog),
            vec![
                ("8".to_string(), 1),
                ("16".to_string(), 2),
                ("128".to_string(), 1)
            ]
        );
    }
}
