mod health_check;
mod process;

pub use health_check::*;
pub use process::*;
