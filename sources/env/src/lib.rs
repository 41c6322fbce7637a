mod source;
mod vars;

pub use source::{EnvDataSource, DATA_SOURCE_ID, VARS_SERVICE};
pub use vars::EnvVars;
