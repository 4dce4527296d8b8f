pub mod bits;
pub mod consts;
pub mod report;
pub mod status;
