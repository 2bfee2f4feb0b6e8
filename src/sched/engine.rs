//! Motor de escalonamento.
//!
//! [`SchedEngine`] é o dono exclusivo de todo o estado mutável da política
//! (arena de processos, tabela de CPUs, PRNG da loteria) e dos handles dos
//! colaboradores. Cada evento externo entra por um método público e roda
//! até o fim — o modelo é single-threaded por construção, então nenhum
//! lock interno é necessário.

use super::config::BALANCE_TIMEOUT_MS;
use super::cpu::{CpuTable, Machine};
use super::proc::{ProcTable, SchedProc};
use crate::hal::traits::{ClockHal, ExecutorHal, TimerHal};
use crate::klib::rand::Xorshift64;
use crate::sys::types::Endpoint;

/// Motor de política de escalonamento.
pub struct SchedEngine<'h> {
    pub(crate) procs: ProcTable,
    pub(crate) cpus: CpuTable,
    pub(crate) machine: Machine,
    /// Pai que marca processos de sistema (criados pelo gerenciador de
    /// serviços privilegiado)
    pub(crate) system_parent: Endpoint,
    /// Identidade deste servidor, devolvida como delegado no registro
    pub(crate) self_ep: Endpoint,
    pub(crate) rng: Xorshift64,
    pub(crate) executor: &'h dyn ExecutorHal,
    pub(crate) timer: &'h dyn TimerHal,
}

impl<'h> SchedEngine<'h> {
    /// Constrói o motor e arma o timer de envelhecimento.
    ///
    /// O PRNG é semeado UMA única vez aqui, a partir do relógio monotônico.
    pub fn new(
        machine: Machine,
        system_parent: Endpoint,
        self_ep: Endpoint,
        executor: &'h dyn ExecutorHal,
        timer: &'h dyn TimerHal,
        clock: &dyn ClockHal,
    ) -> Self {
        let engine = Self {
            procs: ProcTable::new(),
            cpus: CpuTable::new(),
            machine,
            system_parent,
            self_ep,
            rng: Xorshift64::new(clock.monotonic_ns()),
            executor,
            timer,
        };

        engine.timer.arm(BALANCE_TIMEOUT_MS);
        crate::kinfo!("(SchedD) Motor de escalonamento pronto. CPUs=", machine.processors);
        engine
    }

    /// Processo cujo pai é o gerenciador de serviços?
    pub(crate) fn is_system_proc(&self, proc: &SchedProc) -> bool {
        proc.parent == self.system_parent
    }

    /// A colocação deste processo foi contada na tabela de carga?
    pub(crate) fn placement_counted(&self, proc: &SchedProc) -> bool {
        self.machine.processors > 1 && !self.is_system_proc(proc)
    }

    /// Consulta somente-leitura de um processo registrado.
    pub fn proc(&self, endpoint: Endpoint) -> Option<&SchedProc> {
        self.procs.lookup(endpoint).ok().map(|i| self.procs.slot(i))
    }
}
