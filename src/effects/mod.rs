pub(crate) mod blur;
pub(crate) mod flip;
pub(crate) mod fx;
pub(crate) mod parallel;
pub(crate) mod pixelate;
pub(crate) mod scatter;
pub(crate) mod tone;
