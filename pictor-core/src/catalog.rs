//! Icon catalog.
//!
//! The catalog is the deduplicated set of icons one generation run works on.
//! It is built as a fold over loaded icons and offers two views that must not
//! be confused:
//!
//! - [`IconCatalog::icons`]: one icon per `(size, name)`, in insertion order,
//!   used for emission
//! - [`IconCatalog::name_index`]: sorted, deduplicated bare names, used for
//!   reporting only

use std::collections::{BTreeSet, HashSet};

use indexmap::IndexMap;
use pictor_ir::{Icon, IconKey, SizeToken};

/// Deduplicated, insertion-ordered collection of icons.
#[derive(Debug, Clone, Default)]
pub struct IconCatalog {
    icons: IndexMap<IconKey, Icon>,
    collisions: Vec<IconKey>,
}

impl IconCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from icons in processing order.
    ///
    /// On a `(size, name)` collision the later icon replaces the earlier one
    /// but keeps its position.
    pub fn from_icons(icons: impl IntoIterator<Item = Icon>) -> Self {
        icons.into_iter().fold(Self::new(), Self::with)
    }

    /// Return a catalog that also contains `icon`.
    pub fn with(mut self, icon: Icon) -> Self {
        let key = icon.key.clone();
        if self.icons.insert(key.clone(), icon).is_some() {
            tracing::warn!(%key, "duplicate icon, keeping the later one");
            self.collisions.push(key);
        }
        self
    }

    /// Icons in emission order.
    pub fn icons(&self) -> impl ExactSizeIterator<Item = &Icon> {
        self.icons.values()
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &IconKey> {
        self.icons.keys()
    }

    pub fn get(&self, key: &IconKey) -> Option<&Icon> {
        self.icons.get(key)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Keys that were seen more than once, one entry per replaced icon.
    pub fn collisions(&self) -> &[IconKey] {
        &self.collisions
    }

    /// Sorted, deduplicated icon names across all sizes.
    pub fn name_index(&self) -> Vec<String> {
        build_name_index(self.icons.keys())
    }

    /// Icons grouped by size, sizes in ascending numeric order, each group in
    /// emission order.
    pub fn by_size(&self) -> Vec<(&SizeToken, Vec<&Icon>)> {
        let mut groups: Vec<(&SizeToken, Vec<&Icon>)> = Vec::new();
        for icon in self.icons.values() {
            match groups.iter_mut().find(|(size, _)| **size == icon.key.size) {
                Some((_, group)) => group.push(icon),
                None => groups.push((&icon.key.size, vec![icon])),
            }
        }
        groups.sort_by(|(a, _), (b, _)| {
            let (a, b) = (a.as_str(), b.as_str());
            a.len().cmp(&b.len()).then_with(|| a.cmp(b))
        });
        groups
    }

    pub fn into_icons(self) -> Vec<Icon> {
        self.icons.into_values().collect()
    }
}

/// Sorted, deduplicated bare names of the given keys.
pub fn build_name_index<'a>(keys: impl IntoIterator<Item = &'a IconKey>) -> Vec<String> {
    keys.into_iter()
        .map(|key| key.name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Keys present locally that the remote source no longer provides, sorted.
///
/// These are candidates for manual pruning; nothing is deleted.
pub fn detect_missing<'a>(
    local: impl IntoIterator<Item = &'a IconKey>,
    remote: impl IntoIterator<Item = &'a IconKey>,
) -> Vec<IconKey> {
    let remote: HashSet<&IconKey> = remote.into_iter().collect();
    local
        .into_iter()
        .filter(|key| !remote.contains(key))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(size: &str, name: &str) -> IconKey {
        IconKey::new(SizeToken::new(size).unwrap(), name)
    }

    fn icon(size: &str, name: &str, markup: &str) -> Icon {
        Icon::new(key(size, name), "Icon", Vec::new(), markup)
    }

    #[test]
    fn test_duplicate_keeps_later() {
        let catalog = IconCatalog::from_icons([
            icon("16", "home", "<path d=\"old\"/>"),
            icon("16", "home", "<path d=\"new\"/>"),
        ]);

        assert_eq!(catalog.len(), 1);
        let kept = catalog.get(&key("16", "home")).unwrap();
        assert_eq!(kept.inner_markup, "<path d=\"new\"/>");
        assert_eq!(catalog.collisions(), &[key("16", "home")]);
    }

    #[test]
    fn test_duplicate_keeps_first_position() {
        let catalog = IconCatalog::from_icons([
            icon("16", "home", "a"),
            icon("24", "home", "b"),
            icon("16", "home", "c"),
        ]);

        let order: Vec<_> = catalog.icons().map(|i| i.inner_markup.as_str()).collect();
        assert_eq!(order, vec!["c", "b"]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let catalog = IconCatalog::from_icons([
            icon("24", "zoom", ""),
            icon("16", "alert", ""),
            icon("16", "zoom", ""),
        ]);

        let keys: Vec<String> = catalog.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["24/zoom", "16/alert", "16/zoom"]);
        assert!(catalog.collisions().is_empty());
    }

    #[test]
    fn test_name_index_sorted_and_deduplicated() {
        let catalog = IconCatalog::from_icons([
            icon("24", "zoom", ""),
            icon("16", "alert", ""),
            icon("16", "zoom", ""),
        ]);

        assert_eq!(catalog.name_index(), vec!["alert", "zoom"]);
    }

    #[test]
    fn test_by_size_numeric_order() {
        let catalog = IconCatalog::from_icons([
            icon("16", "b", ""),
            icon("128", "a", ""),
            icon("8", "a", ""),
            icon("16", "a", ""),
        ]);

        let groups: Vec<(&str, Vec<&str>)> = catalog
            .by_size()
            .into_iter()
            .map(|(size, icons)| (size.as_str(), icons.iter().map(|i| i.name()).collect()))
            .collect();
        assert_eq!(
            groups,
            vec![("8", vec!["a"]), ("16", vec!["b", "a"]), ("128", vec!["a"])]
        );
    }

    #[test]
    fn test_detect_missing() {
        let local = [key("16", "home"), key("16", "trash"), key("24", "home")];
        let remote = [key("24", "home"), key("16", "home"), key("32", "new")];

        assert_eq!(detect_missing(&local, &remote), vec![key("16", "trash")]);
    }

    #[test]
    fn test_detect_missing_nothing_missing() {
        let local = [key("16", "home")];
        let remote = [key("16", "home")];

        assert!(detect_missing(&local, &remote).is_empty());
    }
}
