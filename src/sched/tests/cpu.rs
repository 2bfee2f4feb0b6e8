//! Testes do balanceador de carga de CPU

#![cfg(test)]

use super::mock::*;
use crate::sched::cpu::{CpuTable, Machine};
use crate::sys::error::SchedError;
use crate::sys::types::Endpoint;

#[test]
fn test_uniprocessor_always_bsp() {
    let machine = Machine::uniprocessor();
    let mut cpus = CpuTable::new();

    assert_eq!(cpus.pick(&machine, false), Ok(0));
    assert_eq!(cpus.pick(&machine, true), Ok(0));
    // Colocação em uniprocessador não é balanceada: nada é contado
    assert_eq!(cpus.load(0), 0);
}

#[test]
fn test_system_proc_goes_to_bsp() {
    let machine = smp(4);
    let mut cpus = CpuTable::new();

    assert_eq!(cpus.pick(&machine, true), Ok(0));
    assert_eq!(cpus.load(0), 0);
}

#[test]
fn test_least_loaded_non_bsp_with_index_tiebreak() {
    let machine = smp(4);
    let mut cpus = CpuTable::new();

    // Cargas iguais: menor índice vence; depois o balanceio roda a fila
    assert_eq!(cpus.pick(&machine, false), Ok(1));
    assert_eq!(cpus.pick(&machine, false), Ok(2));
    assert_eq!(cpus.pick(&machine, false), Ok(3));
    assert_eq!(cpus.pick(&machine, false), Ok(1));

    assert_eq!(cpus.load(1), 2);
    assert_eq!(cpus.load(2), 1);
    assert_eq!(cpus.load(3), 1);
}

#[test]
fn test_dead_cpu_never_chosen() {
    let machine = smp(4);
    let mut cpus = CpuTable::new();
    cpus.mark_dead(1);

    assert_eq!(cpus.pick(&machine, false), Ok(2));
    assert_eq!(cpus.pick(&machine, false), Ok(3));
    assert_eq!(cpus.pick(&machine, false), Ok(2));
    assert!(!cpus.is_available(1));
}

#[test]
fn test_bsp_fallback_when_no_other_cpu_alive() {
    let machine = smp(4);
    let mut cpus = CpuTable::new();
    cpus.mark_dead(1);
    cpus.mark_dead(2);
    cpus.mark_dead(3);

    // Sobrou só a BSP: ela recebe e a colocação é contada
    assert_eq!(cpus.pick(&machine, false), Ok(0));
    assert_eq!(cpus.load(0), 1);
}

#[test]
fn test_no_usable_cpu_when_all_dead() {
    let machine = smp(2);
    let mut cpus = CpuTable::new();
    cpus.mark_dead(0);
    cpus.mark_dead(1);

    assert_eq!(cpus.pick(&machine, false), Err(SchedError::NoUsableCpu));
    assert_eq!(cpus.pick(&machine, true), Err(SchedError::NoUsableCpu));
}

#[test]
fn test_release_ignores_dead_and_zero() {
    let mut cpus = CpuTable::new();
    cpus.release(0); // sem colocação contada: não deriva para negativo
    assert_eq!(cpus.load(0), 0);

    cpus.mark_dead(1);
    cpus.release(1); // morta continua morta
    assert!(!cpus.is_available(1));
}

#[test]
fn test_registration_retries_on_bad_cpu() {
    let executor = MockExecutor::new();
    executor.bad_cpus.lock().push(1);
    let timer = MockTimer::default();
    let mut engine = engine(smp(3), &executor, &timer);

    let ep = Endpoint(10);
    engine.start_scheduling(bootstrap_req(ep)).unwrap();

    // CPU 1 recusada e morta; o processo acaba na CPU 2
    assert_eq!(engine.proc(ep).unwrap().cpu, 2);
    assert!(!engine.cpus.is_available(1));
    assert_eq!(engine.cpus.load(2), 1);

    // O push que o executor recusou não chegou a ser aplicado
    assert!(executor.pushes.lock().iter().all(|p| p.cpu != Some(1)));
}

#[test]
fn test_registration_fails_when_cpus_run_out() {
    let executor = MockExecutor::new();
    executor.bad_cpus.lock().push(0);
    executor.bad_cpus.lock().push(1);
    let timer = MockTimer::default();
    let mut engine = engine(smp(2), &executor, &timer);

    let rv = engine.start_scheduling(bootstrap_req(Endpoint(10)));
    assert_eq!(rv, Err(SchedError::NoUsableCpu));
    assert_eq!(engine.procs.in_use_count(), 0);
}
