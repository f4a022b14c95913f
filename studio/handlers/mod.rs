pub mod controls;
pub mod frames;
pub mod page;
pub mod scene;
