//! Testes da máquina de estados de prioridade/quantum

#![cfg(test)]

use super::mock::*;
use crate::sched::config::{MIN_USER_Q, TICKETS_MAX, TICKETS_MIN, USER_Q};
use crate::sched::cpu::Machine;
use crate::sched::lottery::grant_tickets;
use crate::sched::proc::SchedProc;
use crate::sys::error::SchedError;
use crate::sys::types::Endpoint;

#[test]
fn test_quantum_expiry_demotes_one_queue() {
    let executor = MockExecutor::new();
    let timer = MockTimer::default();
    let mut engine = engine(Machine::uniprocessor(), &executor, &timer);

    let ep = Endpoint(10);
    engine.start_scheduling(bootstrap_req(ep)).unwrap();

    engine.quantum_expired(ep).unwrap();
    assert_eq!(engine.proc(ep).unwrap().priority, USER_Q + 1);
}

#[test]
fn test_demotion_clamps_at_min_user_q() {
    let executor = MockExecutor::new();
    let timer = MockTimer::default();
    let mut engine = engine(Machine::uniprocessor(), &executor, &timer);

    let ep = Endpoint(10);
    engine.start_scheduling(bootstrap_req(ep)).unwrap();

    // Exatamente MIN_USER_Q - USER_Q expirações chegam ao fundo
    for _ in 0..(MIN_USER_Q - USER_Q) {
        engine.quantum_expired(ep).unwrap();
    }
    assert_eq!(engine.proc(ep).unwrap().priority, MIN_USER_Q);

    // Expirações adicionais não passam do fundo
    engine.quantum_expired(ep).unwrap();
    engine.quantum_expired(ep).unwrap();
    assert_eq!(engine.proc(ep).unwrap().priority, MIN_USER_Q);
}

#[test]
fn test_quantum_expiry_push_is_local() {
    let executor = MockExecutor::new();
    let timer = MockTimer::default();
    let mut engine = engine(Machine::uniprocessor(), &executor, &timer);

    let ep = Endpoint(10);
    engine.start_scheduling(bootstrap_req(ep)).unwrap();
    engine.quantum_expired(ep).unwrap();

    // A transição local carrega prioridade e quantum; CPU fica unset
    let push = executor.last_push().unwrap();
    assert_eq!(push.priority, Some(USER_Q + 1));
    assert!(push.quantum.is_some());
    assert_eq!(push.cpu, None);
}

#[test]
fn test_quantum_expiry_unknown_endpoint() {
    let executor = MockExecutor::new();
    let timer = MockTimer::default();
    let mut engine = engine(Machine::uniprocessor(), &executor, &timer);

    assert_eq!(
        engine.quantum_expired(Endpoint(77)),
        Err(SchedError::UnknownProcess)
    );
}

#[test]
fn test_ceiling_change_sets_priority_and_saturates_tickets() {
    let executor = MockExecutor::new();
    let timer = MockTimer::default();
    let mut engine = engine(Machine::uniprocessor(), &executor, &timer);

    let ep = Endpoint(10);
    engine.start_scheduling(bootstrap_req(ep)).unwrap();
    let idx = engine.procs.lookup(ep).unwrap();
    engine.procs.slot_mut(idx).tickets = 40;

    engine.set_ceiling(ep, 5, 100).unwrap();

    let p = engine.proc(ep).unwrap();
    assert_eq!(p.priority, 5);
    assert_eq!(p.max_priority, 5);
    assert_eq!(p.tickets, TICKETS_MAX); // 40 + 100 satura em 50
}

#[test]
fn test_ceiling_change_rejects_out_of_range() {
    let executor = MockExecutor::new();
    let timer = MockTimer::default();
    let mut engine = engine(Machine::uniprocessor(), &executor, &timer);

    let ep = Endpoint(10);
    engine.start_scheduling(bootstrap_req(ep)).unwrap();

    assert_eq!(
        engine.set_ceiling(ep, 16, 0),
        Err(SchedError::InvalidCeiling)
    );
    assert_eq!(engine.proc(ep).unwrap().priority, USER_Q);
}

#[test]
fn test_ceiling_change_unknown_endpoint() {
    let executor = MockExecutor::new();
    let timer = MockTimer::default();
    let mut engine = engine(Machine::uniprocessor(), &executor, &timer);

    assert_eq!(
        engine.set_ceiling(Endpoint(77), 5, 0),
        Err(SchedError::UnknownProcess)
    );
}

#[test]
fn test_ceiling_change_rolls_back_on_push_failure() {
    let executor = MockExecutor::new();
    let timer = MockTimer::default();
    let mut engine = engine(Machine::uniprocessor(), &executor, &timer);

    let ep = Endpoint(10);
    engine.start_scheduling(bootstrap_req(ep)).unwrap();
    let before = *engine.proc(ep).unwrap();

    *executor.reject_pushes.lock() = true;
    let rv = engine.set_ceiling(ep, 5, 10);
    assert_eq!(rv, Err(SchedError::ExecutorRejected));

    // Snapshot restaurado por inteiro
    let after = engine.proc(ep).unwrap();
    assert_eq!(after.priority, before.priority);
    assert_eq!(after.max_priority, before.max_priority);
    assert_eq!(after.tickets, before.tickets);
}

#[test]
fn test_grant_tickets_stays_in_bounds() {
    let mut p = SchedProc::EMPTY;
    p.tickets = TICKETS_MIN;

    for requested in [5, 100, -200, 49, -1, 0, 1000, -3, 7, i32::MAX, i32::MIN + 100] {
        let old = p.tickets as i32;
        let applied = grant_tickets(&mut p, requested);
        assert!(p.tickets >= TICKETS_MIN && p.tickets <= TICKETS_MAX);
        assert_eq!(p.tickets as i32, old + applied);
    }
}
