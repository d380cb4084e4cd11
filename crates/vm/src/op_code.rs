//! Legacy NeoVM opcodes emitted by this SDK.
//!
//! Only the subset relevant to invocation scripts and locking scripts is
//! defined; data pushes of 1-75 bytes use the length itself as the
//! opcode and have no named constant.

/// Legacy NeoVM opcode values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OpCode {
    /// Pushes an empty byte array (numeric zero / false).
    PUSH0 = 0x00,

    /// The next byte is the length of the data to push.
    PUSHDATA1 = 0x4C,

    /// The next two bytes are the length of the data to push.
    PUSHDATA2 = 0x4D,

    /// The next four bytes are the length of the data to push.
    PUSHDATA4 = 0x4E,

    /// Pushes the number -1.
    PUSHM1 = 0x4F,

    /// Pushes the number 1 (also the canonical true).
    PUSH1 = 0x51,
    PUSH2 = 0x52,
    PUSH3 = 0x53,
    PUSH4 = 0x54,
    PUSH5 = 0x55,
    PUSH6 = 0x56,
    PUSH7 = 0x57,
    PUSH8 = 0x58,
    PUSH9 = 0x59,
    PUSH10 = 0x5A,
    PUSH11 = 0x5B,
    PUSH12 = 0x5C,
    PUSH13 = 0x5D,
    PUSH14 = 0x5E,
    PUSH15 = 0x5F,
    PUSH16 = 0x60,

    /// Calls the contract whose script hash follows the opcode.
    APPCALL = 0x67,

    /// Calls the interop service named by the following string.
    SYSCALL = 0x68,

    /// Duplicates the top of the alt stack onto the main stack.
    DUPFROMALTSTACK = 0x6A,

    /// Moves the top of the main stack to the alt stack.
    TOALTSTACK = 0x6B,

    /// Moves the top of the alt stack to the main stack.
    FROMALTSTACK = 0x6C,

    /// Duplicates the top stack item.
    DUP = 0x76,

    /// Swaps the two top stack items.
    SWAP = 0x7C,

    /// Verifies an ECDSA signature against a public key.
    CHECKSIG = 0xAC,

    /// Creates a new array of the size on top of the stack.
    NEWARRAY = 0xC0,

    /// Packs the top n items into an array.
    PACK = 0xC1,

    /// Creates a new struct from the top n items.
    NEWSTRUCT = 0xC6,

    /// Appends an item to an array or struct.
    APPEND = 0xC8,
}

impl From<OpCode> for u8 {
    fn from(op: OpCode) -> u8 {
        op as u8
    }
}
