use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to parse SVG document: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("expected an <svg> root element, found <{found}>")]
    NotSvg { found: String },
}
