//! System Definitions.
//!
//! Contém os tipos e erros que definem a interface entre o servidor de
//! escalonamento e o mundo (kernel, camada de mensagens).

pub mod error;
pub mod types;

pub use error::{SchedError, SchedResult};
pub use types::{CpuId, Endpoint};
