//! Máquina de estados de prioridade/quantum.
//!
//! Toda transição termina empurrando ao executor apenas os campos
//! selecionados pela [`PushMask`]; campos fora da máscara cruzam a
//! interface como `None`. A colocação de CPU NÃO é refeita aqui — ela
//! acontece uma vez no registro (e no loop de re-colocação dele).

use bitflags::bitflags;

use super::config::{MIN_USER_Q, NR_SCHED_QUEUES};
use super::engine::SchedEngine;
use super::lottery::{grant_tickets, LotteryOutcome};
use crate::hal::traits::PushError;
use crate::sys::error::{SchedError, SchedResult};
use crate::sys::types::Endpoint;

bitflags! {
    /// Seleção de campos de um push ao executor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PushMask: u8 {
        const PRIO = 1 << 0;
        const QUANTUM = 1 << 1;
        const CPU = 1 << 2;
        /// Transição local: prioridade + quantum, sem migração
        const LOCAL = Self::PRIO.bits() | Self::QUANTUM.bits();
        /// Estado completo, usado no registro e na promoção da loteria
        const ALL = Self::LOCAL.bits() | Self::CPU.bits();
    }
}

impl SchedEngine<'_> {
    /// Empurra ao executor os campos do slot selecionados pela máscara.
    pub(crate) fn schedule_process(&self, idx: usize, mask: PushMask) -> Result<(), PushError> {
        let p = self.procs.slot(idx);

        let priority = mask.contains(PushMask::PRIO).then_some(p.priority);
        let quantum = mask.contains(PushMask::QUANTUM).then_some(p.time_slice);
        let cpu = mask.contains(PushMask::CPU).then_some(p.cpu);

        let rv = self.executor.push_schedule(p.endpoint, priority, quantum, cpu);
        if rv.is_err() {
            crate::kwarn!("(SchedD) Executor recusou push para endpoint=", p.endpoint.0);
        }
        rv
    }

    /// Fim de quantum: demove uma fila (clamp em `MIN_USER_Q`), empurra a
    /// transição local e roda uma rodada de loteria.
    pub fn quantum_expired(&mut self, endpoint: Endpoint) -> SchedResult<LotteryOutcome> {
        let idx = match self.procs.lookup(endpoint) {
            Ok(i) => i,
            Err(e) => {
                crate::kwarn!("(SchedD) Endpoint inválido em fim de quantum: ", endpoint.0);
                return Err(e);
            }
        };

        {
            let p = self.procs.slot_mut(idx);
            if p.priority < MIN_USER_Q {
                p.priority += 1; // rebaixa uma fila
            }
        }

        self.schedule_process(idx, PushMask::LOCAL)
            .map_err(|_| SchedError::ExecutorRejected)?;

        self.run_lottery()
    }

    /// Mudança explícita de teto (equivalente a nice).
    ///
    /// Atualização transacional: snapshot de `{priority, max_priority,
    /// tickets}`, aplica, empurra; se o executor recusar, restaura o
    /// snapshot antes de devolver o erro.
    pub(crate) fn change_ceiling(
        &mut self,
        idx: usize,
        new_ceiling: u8,
        ticket_request: i32,
    ) -> SchedResult<LotteryOutcome> {
        if new_ceiling as usize >= NR_SCHED_QUEUES {
            return Err(SchedError::InvalidCeiling);
        }

        let (old_priority, old_max, old_tickets) = {
            let p = self.procs.slot(idx);
            (p.priority, p.max_priority, p.tickets)
        };

        {
            let p = self.procs.slot_mut(idx);
            p.priority = new_ceiling;
            p.max_priority = new_ceiling;
            grant_tickets(p, ticket_request);
        }

        if self.schedule_process(idx, PushMask::LOCAL).is_err() {
            let p = self.procs.slot_mut(idx);
            p.priority = old_priority;
            p.max_priority = old_max;
            p.tickets = old_tickets;
            return Err(SchedError::ExecutorRejected);
        }

        self.run_lottery()
    }
}
