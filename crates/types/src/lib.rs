mod contract_kind;
mod write_mode;

pub use contract_kind::*;
pub use write_mode::*;
