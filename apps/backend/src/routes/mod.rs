pub mod check;
pub mod items;
