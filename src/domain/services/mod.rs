mod access_gate;
mod session_store;

pub use access_gate::*;
pub use session_store::*;
