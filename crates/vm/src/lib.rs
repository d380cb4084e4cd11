//! Legacy NeoVM opcode table and invocation-parameter encoding.
//!
//! Contract-call arguments are encoded as a bytecode sequence that pushes
//! the argument values onto the VM's evaluation stack. The argument list
//! is emitted in reverse so the first logical argument ends up on top of
//! the stack, which is the target machine's calling convention.

mod op_code;
mod script_builder;
mod script_value;

pub use op_code::OpCode;
pub use script_builder::ScriptBuilder;
pub use script_value::ScriptValue;
