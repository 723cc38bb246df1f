pub(crate) mod queue;
pub(crate) mod render;
pub(crate) mod wave;
