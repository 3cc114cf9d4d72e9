pub(crate) mod capture;
pub(crate) mod decode;
