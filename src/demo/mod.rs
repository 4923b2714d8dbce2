pub(crate) mod auto_random;
pub(crate) mod combination;
pub(crate) mod slideshow;
pub(crate) mod timer;
