pub(crate) mod common;
pub mod quick_sort;
