pub mod encoding;
pub mod network;
pub mod portable;
pub mod predict;
pub mod train;
