//! Testes de fumaça do servidor (feature `self_test`).
//!
//! Executáveis no alvo, sem harness: o hospedeiro chama
//! [`run_sched_tests`] durante o boot de desenvolvimento.

use super::config::{DEFAULT_USER_TIME_SLICE, MIN_USER_Q, USER_Q};
use super::cpu::Machine;
use super::engine::SchedEngine;
use super::lifecycle::{StartPolicy, StartSched};
use crate::hal::traits::{ClockHal, ExecutorHal, PushError, TimerHal};
use crate::sys::types::{CpuId, Endpoint};

struct NullExecutor;

impl ExecutorHal for NullExecutor {
    fn take_over(&self, _endpoint: Endpoint) -> Result<(), PushError> {
        Ok(())
    }

    fn push_schedule(
        &self,
        _endpoint: Endpoint,
        _priority: Option<u8>,
        _quantum: Option<u32>,
        _cpu: Option<CpuId>,
    ) -> Result<(), PushError> {
        Ok(())
    }
}

struct NullTimer;

impl TimerHal for NullTimer {
    fn arm(&self, _period_ms: u64) {}
}

struct FixedClock;

impl ClockHal for FixedClock {
    fn monotonic_ns(&self) -> u64 {
        0x5EED
    }
}

static EXECUTOR: NullExecutor = NullExecutor;
static TIMER: NullTimer = NullTimer;

fn engine() -> SchedEngine<'static> {
    SchedEngine::new(
        Machine::uniprocessor(),
        Endpoint(2),
        Endpoint(1),
        &EXECUTOR,
        &TIMER,
        &FixedClock,
    )
}

/// Executa todos os testes de fumaça do escalonador
pub fn run_sched_tests() {
    crate::kinfo!("╔════════════════════════════════════════╗");
    crate::kinfo!("║     🧪 TESTES DE SCHEDD                ║");
    crate::kinfo!("╚════════════════════════════════════════╝");

    test_bootstrap_defaults();
    test_demotion_clamp();

    crate::kinfo!("╔════════════════════════════════════════╗");
    crate::kinfo!("║  ✅ SCHEDD VALIDADO!                   ║");
    crate::kinfo!("╚════════════════════════════════════════╝");
}

fn test_bootstrap_defaults() {
    let mut engine = engine();
    let ep = Endpoint(7);
    let rv = engine.start_scheduling(StartSched {
        endpoint: ep,
        parent: ep,
        max_priority: USER_Q,
        policy: StartPolicy::Inherit,
    });

    let ok = rv.is_ok()
        && engine
            .proc(ep)
            .map(|p| p.priority == USER_Q && p.time_slice == DEFAULT_USER_TIME_SLICE)
            .unwrap_or(false);

    if ok {
        crate::kok!("Bootstrap entra em USER_Q com quantum padrão");
    } else {
        crate::kfail!("Bootstrap com parâmetros errados");
    }
}

fn test_demotion_clamp() {
    let mut engine = engine();
    let ep = Endpoint(8);
    let _ = engine.start_scheduling(StartSched {
        endpoint: ep,
        parent: ep,
        max_priority: USER_Q,
        policy: StartPolicy::Inherit,
    });

    for _ in 0..2 * (MIN_USER_Q - USER_Q) {
        let _ = engine.quantum_expired(ep);
    }

    if engine.proc(ep).map(|p| p.priority) == Some(MIN_USER_Q) {
        crate::kok!("Demoção satura em MIN_USER_Q");
    } else {
        crate::kfail!("Demoção passou de MIN_USER_Q");
    }
}
