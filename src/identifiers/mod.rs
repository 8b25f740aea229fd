/*! Language identification backends

Holds an [Identifier] trait for implementing other ones.

The production identifier is [process::LidProcess], a line-oriented adapter
over an external classifier command. [fixed::Fixed] is an in-process
implementation for tests and benches. !*/
pub(crate) mod fixed;
pub(crate) mod identification;
pub(crate) mod process;

pub use fixed::Fixed;
pub use identification::Identification;
pub use identification::Identifier;
pub use process::LidProcess;
