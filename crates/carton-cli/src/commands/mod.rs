pub mod attributes;
pub mod check;
pub mod dispatch;
pub mod path;
pub mod plan;
pub mod tree;
