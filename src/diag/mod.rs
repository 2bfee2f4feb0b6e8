//! Diagnóstico do servidor.
//!
//! O transporte de saída (serial, console do sistema, arquivo de log) não
//! pertence a este servidor: é um colaborador registrado uma única vez via
//! [`sink::register`]. As macros de log (`kerror!` .. `ktrace!`) seguem o
//! esquema zero-overhead do kernel: features de compilação removem níveis
//! inteiros do binário.

pub mod logging;
pub mod sink;

pub use sink::{register, DiagSink};
