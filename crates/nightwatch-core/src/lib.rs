pub mod advice;
pub mod capability;
pub mod consts;
pub mod contour;
pub mod edge;
pub mod error;
pub mod extract;
pub mod frame;
pub mod report;
pub mod scan;
pub mod scoring;
pub mod strategy;
