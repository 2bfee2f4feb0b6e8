//! Varredura de envelhecimento.
//!
//! O escalonador rebaixa uma fila a cada fim de quantum; esta varredura
//! periódica puxa de volta, uma fila por período, os processos que estão
//! piores que o próprio teto. Processos dentro da banda de usuário ficam de
//! fora: a recuperação deles é papel exclusivo da loteria.

use super::config::{BALANCE_TIMEOUT_MS, NR_PROCS};
use super::engine::SchedEngine;
use super::policy::PushMask;

impl SchedEngine<'_> {
    /// Callback periódico do timer de envelhecimento.
    ///
    /// Nunca cria nem remove processos e nunca toca na atribuição de CPU.
    /// Uma recusa do executor não tem a quem aflorar a partir do timer:
    /// a promoção é desfeita localmente e a varredura continua.
    pub fn balance_queues(&mut self) {
        for i in 0..NR_PROCS {
            let p = self.procs.slot(i);
            if !p.in_use() {
                continue;
            }
            if p.priority > p.max_priority && !p.in_user_band() {
                self.procs.slot_mut(i).priority -= 1; // sobe uma fila

                if self.schedule_process(i, PushMask::LOCAL).is_err() {
                    let p = self.procs.slot_mut(i);
                    p.priority += 1;
                    crate::kwarn!(
                        "(SchedD) Envelhecimento não aplicado para endpoint=",
                        p.endpoint.0
                    );
                }
            }
        }

        self.timer.arm(BALANCE_TIMEOUT_MS);
    }
}
