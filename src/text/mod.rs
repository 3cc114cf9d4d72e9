pub(crate) mod bytemap;
pub(crate) mod tiles;
