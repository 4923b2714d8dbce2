pub(crate) mod layer;
pub(crate) mod path;
pub(crate) mod style;
pub(crate) mod table;
