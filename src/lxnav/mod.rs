mod shift;
mod xml;

pub use crate::lxnav::shift::encode;
pub use crate::lxnav::xml::render;
