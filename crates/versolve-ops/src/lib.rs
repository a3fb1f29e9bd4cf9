pub mod ops_lock;
pub mod ops_reduce;
pub mod ops_resolve;
pub mod ops_tree;
pub mod project;
