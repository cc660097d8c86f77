pub(crate) mod composite;
pub(crate) mod frame;
pub(crate) mod pipeline;
