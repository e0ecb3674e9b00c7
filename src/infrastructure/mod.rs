//! Infrastructure layer: the collaborators that touch the outside world.
//!
//! - [`cipher`]: Record decryption and sealing
//! - [`input`]: Discrete input events from the terminal or a script
//! - [`keystroke`]: Delivery of a secret as typed text
//! - [`paths`]: Platform directories and tilde expansion

pub mod cipher;
pub mod input;
pub mod keystroke;
pub mod paths;

pub use cipher::{Cipher, CipherError, SealedCipher};
pub use input::{InputSource, ScriptedInput, TerminalInput};
pub use keystroke::{ClipboardSink, DeviceSink, KeystrokeSink, RecordingSink};
pub use paths::{config_dir, data_dir, default_config_file, expand_tilde};
