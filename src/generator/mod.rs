pub mod context;
pub mod modules;
pub mod outlet;
pub mod pipeline;
pub mod review;
pub mod workflow;
