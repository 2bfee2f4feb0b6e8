//! Balanceamento de carga entre CPUs.
//!
//! A tabela guarda um contador de colocações balanceadas por CPU, ou o
//! sentinela [`CPU_DEAD`] para CPUs que o executor recusou: uma CPU morta
//! nunca volta a ser escolhida. Só colocações balanceadas (SMP e processo
//! não-privilegiado) contam — e só essas são liberadas no desregistro, para
//! os contadores nunca derivarem.

use super::config::MAX_CPUS;
use crate::sys::error::{SchedError, SchedResult};
use crate::sys::types::CpuId;

/// Sentinela de CPU morta.
pub const CPU_DEAD: i32 = -1;

/// Descrição da máquina entregue pelo hospedeiro no boot.
#[derive(Debug, Clone, Copy)]
pub struct Machine {
    /// Quantidade de CPUs presentes (limitada a [`MAX_CPUS`])
    pub processors: usize,
    /// CPU primária (BSP), destino de processos de sistema
    pub bsp: CpuId,
}

impl Machine {
    /// Máquina com uma única CPU utilizável.
    pub const fn uniprocessor() -> Self {
        Self {
            processors: 1,
            bsp: 0,
        }
    }
}

/// Contadores de carga por CPU.
pub struct CpuTable {
    load: [i32; MAX_CPUS],
}

impl CpuTable {
    pub const fn new() -> Self {
        Self {
            load: [0; MAX_CPUS],
        }
    }

    /// CPU existe e não foi marcada como morta?
    pub fn is_available(&self, cpu: CpuId) -> bool {
        (cpu as usize) < MAX_CPUS && self.load[cpu as usize] >= 0
    }

    /// Carga atual de uma CPU viva (0 se morta ou fora de alcance).
    pub fn load(&self, cpu: CpuId) -> i32 {
        if self.is_available(cpu) {
            self.load[cpu as usize]
        } else {
            0
        }
    }

    /// Marca a CPU como morta; ela não será mais escolhida.
    pub fn mark_dead(&mut self, cpu: CpuId) {
        if (cpu as usize) < MAX_CPUS {
            self.load[cpu as usize] = CPU_DEAD;
        }
    }

    /// Libera uma colocação contada anteriormente.
    pub fn release(&mut self, cpu: CpuId) {
        if self.is_available(cpu) && self.load[cpu as usize] > 0 {
            self.load[cpu as usize] -= 1;
        }
    }

    /// Escolhe uma CPU para o processo e conta a colocação quando ela é
    /// balanceada.
    ///
    /// - Uniprocessador ou processo de sistema: sempre a BSP (sem contar).
    /// - Caso geral: a CPU viva menos carregada, preferindo não-BSP quando
    ///   alguma existir; empate resolve pelo menor índice.
    ///
    /// `NoUsableCpu` quando nenhuma candidata resta — fatal para o registro
    /// em andamento.
    pub fn pick(&mut self, machine: &Machine, system_proc: bool) -> SchedResult<CpuId> {
        if machine.processors == 1 || system_proc {
            if self.is_available(machine.bsp) {
                return Ok(machine.bsp);
            }
            return Err(SchedError::NoUsableCpu);
        }

        let limit = machine.processors.min(MAX_CPUS);
        let mut chosen: Option<CpuId> = None;
        let mut chosen_load = i32::MAX;
        for c in 0..limit as CpuId {
            if !self.is_available(c) {
                continue;
            }
            // BSP só entra na disputa se nenhuma outra CPU viva existir
            if c == machine.bsp {
                continue;
            }
            if self.load[c as usize] < chosen_load {
                chosen_load = self.load[c as usize];
                chosen = Some(c);
            }
        }

        let cpu = match chosen {
            Some(c) => c,
            None if self.is_available(machine.bsp) => machine.bsp,
            None => return Err(SchedError::NoUsableCpu),
        };

        self.load[cpu as usize] += 1;
        Ok(cpu)
    }
}

impl Default for CpuTable {
    fn default() -> Self {
        Self::new()
    }
}
