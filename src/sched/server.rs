//! Singleton global do servidor.
//!
//! A camada de despacho de mensagens (fora deste crate) precisa de um único
//! ponto para entregar eventos; o motor vive em um `static` protegido por
//! spinlock, no mesmo padrão dos singletons do kernel. Dentro de um evento
//! o motor continua single-threaded — o lock só serializa a entrada.

use spin::Mutex;

use super::cpu::Machine;
use super::engine::SchedEngine;
use crate::hal::traits::{ClockHal, ExecutorHal, TimerHal};
use crate::sys::types::Endpoint;

static SCHEDD: Mutex<Option<SchedEngine<'static>>> = Mutex::new(None);

/// Constrói o motor global. Chamado uma vez no boot do servidor.
pub fn init_scheduling(
    machine: Machine,
    system_parent: Endpoint,
    self_ep: Endpoint,
    executor: &'static dyn ExecutorHal,
    timer: &'static dyn TimerHal,
    clock: &dyn ClockHal,
) {
    let engine = SchedEngine::new(machine, system_parent, self_ep, executor, timer, clock);
    *SCHEDD.lock() = Some(engine);
}

/// Executa um evento contra o motor global.
///
/// `None` se o motor ainda não foi inicializado.
pub fn with_engine<R>(f: impl FnOnce(&mut SchedEngine<'static>) -> R) -> Option<R> {
    SCHEDD.lock().as_mut().map(f)
}
