pub(crate) mod line;
pub(crate) mod sanitize;
pub(crate) mod stats;
