//! Builders for the handful of JavaScript statements wrapper modules use.

mod consts;
mod exports;
mod imports;
mod objects;

pub use consts::Const;
pub use exports::Export;
pub use imports::Import;
pub use objects::ObjectLiteral;
