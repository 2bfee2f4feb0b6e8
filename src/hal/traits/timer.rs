//! Trait do serviço de timer.

/// Timer periódico que dispara a varredura de envelhecimento.
///
/// Armado uma vez na construção do motor e rearmado ao fim de cada
/// varredura; o hospedeiro invoca `SchedEngine::balance_queues` quando o
/// período expira. Sem rearme automático, varreduras nunca se sobrepõem.
pub trait TimerHal: Sync {
    /// Arma (ou rearma) o timer para daqui a `period_ms` milissegundos.
    fn arm(&self, period_ms: u64);
}
