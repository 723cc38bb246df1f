pub(crate) mod distances;
pub(crate) mod pixels;
