pub mod refs;
pub mod spec;

pub(crate) use refs::ref_name;
