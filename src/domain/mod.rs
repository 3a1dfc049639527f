mod name_result;

pub use name_result::*;
