pub mod pagination_controls;
pub mod skeleton;
pub mod sort_controls;
pub mod table;
