//! Trait da fonte de tempo.

/// Leitura monotônica de alta resolução.
///
/// Usada uma única vez, na construção do motor, para semear o PRNG da
/// loteria.
pub trait ClockHal: Sync {
    /// Nanossegundos monotônicos desde um instante arbitrário.
    fn monotonic_ns(&self) -> u64;
}
