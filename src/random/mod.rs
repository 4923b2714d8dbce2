pub(crate) mod xorshift;
