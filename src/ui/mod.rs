pub mod analysis;
pub mod dropdown;
pub mod flash;
