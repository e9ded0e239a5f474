//! In-place sorts. They do not allocate for the elements and may reorder equal elements.

pub mod rust_lomuto_recursive;
pub mod rust_lomuto_stack;
