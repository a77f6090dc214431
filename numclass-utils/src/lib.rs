mod codec;
mod listen;

pub use codec::*;
pub use listen::*;
