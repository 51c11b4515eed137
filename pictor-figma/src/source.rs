use std::collections::BTreeMap;

use pictor_ir::RawComponent;

use crate::Result;

/// Node id → rendered SVG URL.
pub type ImageUrls = BTreeMap<String, String>;

/// A design file that publishes icon components.
///
/// Downloads run on a thread pool, so implementations must be shareable.
pub trait DesignSource: Send + Sync {
    /// Every published component of the file.
    fn components(&self) -> Result<Vec<RawComponent>>;

    /// SVG render URLs for the given node ids.
    ///
    /// Ids the service could not render are absent from the result.
    fn image_urls(&self, ids: &[String]) -> Result<ImageUrls>;

    /// Fetch one rendered SVG.
    fn download(&self, url: &str) -> Result<String>;
}
