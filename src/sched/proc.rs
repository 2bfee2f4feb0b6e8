//! Arena de processos escalonados.
//!
//! Um slot por processo vivo conhecido do servidor. A resolução
//! endpoint→slot é uma busca explícita mantida pelo ciclo de vida; nenhum
//! colaborador guarda índices ou referências para dentro da arena.

use bitflags::bitflags;

use super::config::{MAX_USER_Q, MIN_USER_Q, NR_PROCS};
use crate::sys::error::{SchedError, SchedResult};
use crate::sys::types::{CpuId, Endpoint};

bitflags! {
    /// Flags de estado de um slot.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ProcFlags: u8 {
        /// Slot ocupado por um processo registrado
        const IN_USE = 1 << 0;
    }
}

/// Um processo sob a autoridade deste servidor (um slot da arena).
#[derive(Debug, Clone, Copy)]
pub struct SchedProc {
    /// Identificador opaco do processo
    pub endpoint: Endpoint,
    /// Pai de escalonamento (usado apenas no registro)
    pub parent: Endpoint,
    /// Fila atual; menor = mais urgente, sempre em [0, MIN_USER_Q] nas
    /// transições de quantum
    pub priority: u8,
    /// Teto: melhor fila que o processo pode ocupar
    pub max_priority: u8,
    /// Quantum concedido na fila atual (ms)
    pub time_slice: u32,
    /// CPU atribuída
    pub cpu: CpuId,
    /// Peso na loteria, em [TICKETS_MIN, TICKETS_MAX]
    pub tickets: u8,
    /// Estado do slot
    pub flags: ProcFlags,
}

impl SchedProc {
    /// Slot vazio (conteúdo sem significado enquanto IN_USE estiver limpo).
    pub const EMPTY: SchedProc = SchedProc {
        endpoint: Endpoint::NONE,
        parent: Endpoint::NONE,
        priority: 0,
        max_priority: 0,
        time_slice: 0,
        cpu: 0,
        tickets: 0,
        flags: ProcFlags::empty(),
    };

    /// Slot ocupado?
    pub fn in_use(&self) -> bool {
        self.flags.contains(ProcFlags::IN_USE)
    }

    /// Prioridade atual dentro da banda de usuário?
    pub fn in_user_band(&self) -> bool {
        self.priority >= MAX_USER_Q && self.priority <= MIN_USER_Q
    }
}

/// Arena de capacidade fixa, indexada por inteiro estável.
pub struct ProcTable {
    slots: [SchedProc; NR_PROCS],
}

impl ProcTable {
    pub const fn new() -> Self {
        Self {
            slots: [SchedProc::EMPTY; NR_PROCS],
        }
    }

    /// Resolve um endpoint que deve estar registrado.
    pub fn lookup(&self, endpoint: Endpoint) -> SchedResult<usize> {
        self.slots
            .iter()
            .position(|p| p.in_use() && p.endpoint == endpoint)
            .ok_or(SchedError::UnknownProcess)
    }

    /// Resolve um slot para um endpoint que deve estar livre.
    ///
    /// Endpoint já registrado não resolve como livre (`UnknownProcess`);
    /// arena cheia é `CapacityExceeded`.
    pub fn lookup_free(&self, endpoint: Endpoint) -> SchedResult<usize> {
        if self.lookup(endpoint).is_ok() {
            return Err(SchedError::UnknownProcess);
        }
        self.slots
            .iter()
            .position(|p| !p.in_use())
            .ok_or(SchedError::CapacityExceeded)
    }

    pub fn slot(&self, idx: usize) -> &SchedProc {
        &self.slots[idx]
    }

    pub fn slot_mut(&mut self, idx: usize) -> &mut SchedProc {
        &mut self.slots[idx]
    }

    /// Número de slots ocupados.
    pub fn in_use_count(&self) -> usize {
        self.slots.iter().filter(|p| p.in_use()).count()
    }
}

impl Default for ProcTable {
    fn default() -> Self {
        Self::new()
    }
}
