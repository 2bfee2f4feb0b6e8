//! Tipos básicos da interface do servidor.

/// Identificador opaco de processo (o que a camada de mensagens vê).
///
/// Único enquanto o processo estiver registrado; a resolução para slot é
/// feita pela arena (`sched::proc::ProcTable`).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Endpoint(pub u32);

impl Endpoint {
    /// Endpoint inválido (placeholder de slot livre).
    pub const NONE: Endpoint = Endpoint(u32::MAX);

    /// Verifica se o endpoint é válido (não é NONE).
    pub fn is_valid(&self) -> bool {
        *self != Self::NONE
    }

    /// Converte de usize (vindo da camada de mensagens).
    pub fn from_usize(val: usize) -> Self {
        Endpoint(val as u32)
    }

    /// Converte para usize.
    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

/// Índice de CPU.
pub type CpuId = u32;
