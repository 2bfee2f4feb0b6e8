//! Loteria de promoção da banda de usuário.
//!
//! Uma rodada por fim de quantum e por mudança de teto bem-sucedida.
//! Elegível é o processo registrado que está exatamente na fila de entrada
//! (`USER_Q`) — nem promovido, nem rebaixado. O vencedor sobe para
//! `MAX_USER_Q` até a próxima demoção.
//!
//! O pool sorteado é `elegíveis × peso_da_classe`, deliberadamente
//! independente do saldo de bilhetes de cada processo, enquanto a varredura
//! de seleção subtrai o saldo real. A rodada pode portanto terminar sem
//! vencedor mesmo com pool > 0 ([`LotteryOutcome::NoWinner`]); isso é um
//! desfecho benigno do contrato, nunca um erro.

use super::config::{
    LOTTERY_CLASS_WEIGHTS, MAX_USER_Q, NR_PROCS, TICKETS_MAX, TICKETS_MIN, USER_Q,
};
use super::engine::SchedEngine;
use super::policy::PushMask;
use super::proc::SchedProc;
use crate::sys::error::{SchedError, SchedResult};
use crate::sys::types::Endpoint;

/// Desfecho de uma rodada de loteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotteryOutcome {
    /// Um processo foi promovido a `MAX_USER_Q`
    Winner(Endpoint),
    /// Nenhum processo elegível nesta rodada
    NoEligible,
    /// Pool > 0, mas a varredura esgotou sem cruzar o alvo
    NoWinner,
}

/// Participa da rodada atual?
fn eligible(p: &SchedProc) -> bool {
    p.in_use() && p.in_user_band() && p.priority == USER_Q
}

/// Concede bilhetes com saturação em `[TICKETS_MIN, TICKETS_MAX]`.
///
/// Retorna o delta efetivamente aplicado — pode ser menor que o pedido, ou
/// negativo para pedidos negativos.
pub(crate) fn grant_tickets(p: &mut SchedProc, requested: i32) -> i32 {
    let old = p.tickets as i32;
    let new = old
        .saturating_add(requested)
        .clamp(TICKETS_MIN as i32, TICKETS_MAX as i32);
    p.tickets = new as u8;
    new - old
}

impl SchedEngine<'_> {
    /// Executa uma rodada de loteria.
    pub(crate) fn run_lottery(&mut self) -> SchedResult<LotteryOutcome> {
        // 1. Classe da rodada define a contribuição de cada elegível
        let class = self.rng.below(LOTTERY_CLASS_WEIGHTS.len() as u32) as usize;
        let weight = LOTTERY_CLASS_WEIGHTS[class];

        let mut n_tickets: u32 = 0;
        for i in 0..NR_PROCS {
            if eligible(self.procs.slot(i)) {
                n_tickets += weight;
            }
        }

        if n_tickets == 0 {
            return Ok(LotteryOutcome::NoEligible);
        }

        // 2. Bilhete sorteado dentro do pool
        let mut target = self.rng.below(n_tickets) as i64;
        crate::ktrace!("(SchedD) Loteria: pool=", n_tickets);

        // 3. Varredura em ordem de arena subtraindo o saldo real de cada
        //    elegível; o primeiro a tornar o alvo negativo vence
        for i in 0..NR_PROCS {
            if !eligible(self.procs.slot(i)) {
                continue;
            }
            target -= self.procs.slot(i).tickets as i64;
            if target < 0 {
                let winner = self.procs.slot(i).endpoint;
                self.procs.slot_mut(i).priority = MAX_USER_Q;

                if self.schedule_process(i, PushMask::ALL).is_err() {
                    // Promoção não aplicada: restaura e aflora a recusa
                    self.procs.slot_mut(i).priority = USER_Q;
                    return Err(SchedError::ExecutorRejected);
                }

                crate::kdebug!("(SchedD) Loteria: vencedor endpoint=", winner.0);
                return Ok(LotteryOutcome::Winner(winner));
            }
        }

        // Pool dimensionado pela classe, varredura pelo saldo real: o alvo
        // pode sobreviver à varredura inteira
        Ok(LotteryOutcome::NoWinner)
    }
}
