//! Trait do executor privilegiado.
//!
//! O executor é quem de fato roda processos; este servidor apenas empurra
//! os parâmetros escolhidos (prioridade, quantum, CPU).

use crate::sys::types::{CpuId, Endpoint};

/// Falha de uma operação do executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushError {
    /// A CPU indicada não é válida; o chamador deve marcá-la como morta e
    /// tentar outra colocação.
    BadCpu,
    /// Qualquer outra recusa; aflora como `SchedError::ExecutorRejected`.
    Rejected,
}

/// Superfície de controle do executor.
pub trait ExecutorHal: Sync {
    /// Assume a autoridade de escalonamento sobre o processo.
    fn take_over(&self, endpoint: Endpoint) -> Result<(), PushError>;

    /// Empurra novos parâmetros de escalonamento.
    ///
    /// Campos `None` não são alterados nesta chamada (sentinela "unset").
    fn push_schedule(
        &self,
        endpoint: Endpoint,
        priority: Option<u8>,
        quantum: Option<u32>,
        cpu: Option<CpuId>,
    ) -> Result<(), PushError>;
}
