pub use error::Fault;
pub use frame::{FrameBuffer, Pixels};
pub use instruction::Instruction;
pub use interpreter::{Interpreter, Mode};

pub mod constants;
pub mod error;
pub mod frame;
pub mod instruction;
pub mod keypad;
pub mod memory;
pub mod opcode;
pub mod timer;

mod interpreter;
