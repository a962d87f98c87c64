pub(crate) mod circle;
pub(crate) mod common;
pub(crate) mod polygon;
