use crate::js::{property_key, single_quoted};

#[derive(Debug, Clone)]
enum Entry {
    Property { key: String, value: String },
    Spread(String),
}

/// A single-line object literal, e.g. `{ width: '16', ...attrs }`.
#[derive(Debug, Clone, Default)]
pub struct ObjectLiteral {
    entries: Vec<Entry>,
    trailing_comma: bool,
}

impl ObjectLiteral {
    pub fn new() -> Self {
        Self::default()
    }

    /// A property with a string value; key and value are quoted as needed.
    pub fn string(self, key: &str, value: &str) -> Self {
        self.raw(key, single_quoted(value))
    }

    /// A property with a raw expression as value.
    pub fn raw(mut self, key: &str, expr: impl Into<String>) -> Self {
        self.entries.push(Entry::Property {
            key: property_key(key),
            value: expr.into(),
        });
        self
    }

    pub fn spread(mut self, expr: impl Into<String>) -> Self {
        self.entries.push(Entry::Spread(expr.into()));
        self
    }

    pub fn trailing_comma(mut self) -> Self {
        self.trailing_comma = true;
        self
    }

    pub fn build(&self) -> String {
        if self.entries.is_empty() {
            return "{}".to_string();
        }
        let entries: Vec<String> = self
            .entries
            .iter()
            .map(|entry| match entry {
                Entry::Property { key, value } => format!("{}: {}", key, value),
                Entry::Spread(expr) => format!("...{}", expr),
            })
            .collect();
        let comma = if self.trailing_comma { "," } else { "" };
        format!("{{ {}{} }}", entries.join(", "), comma)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_literal() {
        let obj = ObjectLiteral::new()
            .string("width", "16")
            .string("stroke-width", "2")
            .spread("attrs");
        assert_eq!(obj.build(), "{ width: '16', 'stroke-width': '2', ...attrs }");
    }

    #[test]
    fn test_trailing_comma_and_nesting() {
        let inner = ObjectLiteral::new().string("__html", "<path/>").build();
        let obj = ObjectLiteral::new()
            .raw("dangerouslySetInnerHTML", inner)
            .spread("attrs")
            .trailing_comma();
        assert_eq!(
            obj.build(),
            "{ dangerouslySetInnerHTML: { __html: '<path/>' }, ...attrs, }"
        );
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(ObjectLiteral::new().build(), "{}");
    }
}
