pub mod cli;
pub mod ctx;
pub mod features;
pub mod io;
pub mod math;
pub mod model;
pub mod pipeline;
pub mod schema;
pub mod scores;
