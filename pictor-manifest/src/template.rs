/// Contents of a fresh `pictor.toml`.
///
/// The template always parses; `file_key` is left as a placeholder when not
/// given.
pub fn default_config(file_key: Option<&str>) -> String {
    let file_key = file_key.unwrap_or("<figma-file-key>");
    format!(
        r##"[figma]
file_key = "{file_key}"
# token_path = ".FIGMA_TOKEN"
# concurrency = 8

[paths]
raw = "raw"
dist = "dist"
out = "."

[generate]
targets = ["elements", "react", "vue"]
element_prefix = "f-icon"

# [colors]
# palette = ["#71717A", "#52525B", "#3F3F46", "#27272A", "#18181B", "#000000", "#000"]
"##
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Config;

    #[test]
    fn test_default_config_parses() {
        let config: Config = default_config(Some("abc123")).parse().unwrap();
        assert_eq!(config.figma.file_key, "abc123");
        assert_eq!(config.figma.concurrency, 8);
    }

    #[test]
    fn test_placeholder_key() {
        let config: Config = default_config(None).parse().unwrap();
        assert_eq!(config.figma.file_key, "<figma-file-key>");
    }
}
