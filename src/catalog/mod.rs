pub(crate) mod elements;
