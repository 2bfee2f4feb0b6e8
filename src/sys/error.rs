//! Tipos de Erro do Servidor de Escalonamento
//!
//! Define erros estruturados para diagnóstico preciso de falhas de política.
//! Rejeições de CPU pelo executor (`PushError::BadCpu`) nunca aparecem aqui:
//! são recuperadas localmente pelo loop de re-colocação do ciclo de vida.

/// Erros do servidor de escalonamento
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedError {
    /// Endpoint não resolve para um slot no estado esperado
    UnknownProcess,
    /// Nenhum slot livre na arena de processos
    CapacityExceeded,
    /// Teto de prioridade fora de [0, NR_SCHED_QUEUES)
    InvalidCeiling,
    /// Remetente sem permissão (veredito da camada de mensagens)
    Unauthorized,
    /// Executor recusou a operação por motivo diferente de CPU inválida
    ExecutorRejected,
    /// Todas as CPUs esgotadas durante a colocação
    NoUsableCpu,
}

impl SchedError {
    /// Retorna descrição legível do erro
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnknownProcess => "Endpoint não resolve para slot válido",
            Self::CapacityExceeded => "Arena de processos cheia",
            Self::InvalidCeiling => "Teto de prioridade inválido",
            Self::Unauthorized => "Remetente não autorizado",
            Self::ExecutorRejected => "Executor recusou a operação",
            Self::NoUsableCpu => "Nenhuma CPU utilizável restante",
        }
    }
}

impl core::fmt::Display for SchedError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tipo Result específico para operações de escalonamento
pub type SchedResult<T> = Result<T, SchedError>;
