//! Ciclo de vida: registro, desregistro e mudança de teto.
//!
//! Entrada e saída de processos do domínio de escalonamento. O registro é
//! a única operação que faz colocação de CPU; uma recusa `BadCpu` do
//! executor mata a CPU escolhida e tenta a próxima, até aceitar ou esgotar
//! a máquina. Um registro que falha não deixa rastro: slot livre e
//! contador de carga devolvido.

use super::config::{DEFAULT_USER_TIME_SLICE, NR_SCHED_QUEUES, TICKETS_INIT, USER_Q};
use super::engine::SchedEngine;
use super::lottery::LotteryOutcome;
use super::policy::PushMask;
use super::proc::ProcFlags;
use crate::hal::traits::PushError;
use crate::sys::error::{SchedError, SchedResult};
use crate::sys::types::Endpoint;

/// Origem dos parâmetros iniciais de um registro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartPolicy {
    /// Quantum definido pelo chamador; prioridade inicial é o teto
    Explicit { quantum: u32 },
    /// Entra em `USER_Q` herdando o quantum do pai registrado
    Inherit,
}

/// Pedido de início de escalonamento.
#[derive(Debug, Clone, Copy)]
pub struct StartSched {
    pub endpoint: Endpoint,
    pub parent: Endpoint,
    /// Teto de prioridade do processo
    pub max_priority: u8,
    pub policy: StartPolicy,
}

impl SchedEngine<'_> {
    /// Assume o escalonamento de um processo.
    ///
    /// Devolve a identidade deste servidor, que o chamador registra como
    /// delegado de escalonamento do processo.
    pub fn start_scheduling(&mut self, req: StartSched) -> SchedResult<Endpoint> {
        if req.max_priority as usize >= NR_SCHED_QUEUES {
            return Err(SchedError::InvalidCeiling);
        }

        let idx = self.procs.lookup_free(req.endpoint)?;

        // Parâmetros iniciais resolvidos antes de qualquer efeito colateral
        let (priority, time_slice) = if req.endpoint == req.parent {
            // Bootstrap: o primeiro processo escalonado é pai de si mesmo
            (USER_Q, DEFAULT_USER_TIME_SLICE)
        } else {
            match req.policy {
                StartPolicy::Explicit { quantum } => (req.max_priority, quantum),
                StartPolicy::Inherit => {
                    let parent_idx = self.procs.lookup(req.parent)?;
                    (USER_Q, self.procs.slot(parent_idx).time_slice)
                }
            }
        };

        // Assumir a autoridade de escalonamento antes de povoar o slot
        if self.executor.take_over(req.endpoint).is_err() {
            crate::kwarn!("(SchedD) Falha ao assumir endpoint=", req.endpoint.0);
            return Err(SchedError::ExecutorRejected);
        }

        {
            let p = self.procs.slot_mut(idx);
            p.endpoint = req.endpoint;
            p.parent = req.parent;
            p.priority = priority;
            p.max_priority = req.max_priority;
            p.time_slice = time_slice;
            p.tickets = TICKETS_INIT;
            p.cpu = self.machine.bsp;
        }

        // Colocação + push completo, re-colocando enquanto o executor
        // recusar a CPU escolhida
        let machine = self.machine;
        let system = self.is_system_proc(self.procs.slot(idx));
        loop {
            let cpu = self.cpus.pick(&machine, system)?;
            self.procs.slot_mut(idx).cpu = cpu;

            match self.schedule_process(idx, PushMask::ALL) {
                Ok(()) => break,
                Err(PushError::BadCpu) => {
                    // Nunca mais tentar esta CPU
                    self.cpus.mark_dead(cpu);
                    crate::kwarn!("(SchedD) CPU recusada pelo executor: ", cpu);
                }
                Err(PushError::Rejected) => {
                    if self.placement_counted(self.procs.slot(idx)) {
                        self.cpus.release(cpu);
                    }
                    return Err(SchedError::ExecutorRejected);
                }
            }
        }

        self.procs.slot_mut(idx).flags.insert(ProcFlags::IN_USE);
        crate::kdebug!("(SchedD) Escalonando endpoint=", req.endpoint.0);

        Ok(self.self_ep)
    }

    /// Abandona o escalonamento de um processo.
    ///
    /// O executor não é contatado: quando este evento chega, o kernel já
    /// retomou a autoridade sobre o processo.
    pub fn stop_scheduling(&mut self, endpoint: Endpoint) -> SchedResult<()> {
        let idx = self.procs.lookup(endpoint)?;

        if self.placement_counted(self.procs.slot(idx)) {
            let cpu = self.procs.slot(idx).cpu;
            self.cpus.release(cpu);
        }

        self.procs.slot_mut(idx).flags = ProcFlags::empty();
        crate::kdebug!("(SchedD) Desregistrado endpoint=", endpoint.0);
        Ok(())
    }

    /// Muda o teto de prioridade e concede bilhetes.
    ///
    /// Delegado à transição transacional da máquina de estados; uma rodada
    /// de loteria fecha a operação e seu desfecho é devolvido ao chamador.
    pub fn set_ceiling(
        &mut self,
        endpoint: Endpoint,
        new_ceiling: u8,
        ticket_request: i32,
    ) -> SchedResult<LotteryOutcome> {
        let idx = self.procs.lookup(endpoint)?;
        self.change_ceiling(idx, new_ceiling, ticket_request)
    }
}
