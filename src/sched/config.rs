//! Constantes de configuração do servidor de escalonamento

/// Número de filas de prioridade (0 = mais urgente)
pub const NR_SCHED_QUEUES: usize = 16;

/// Melhor fila da banda de usuário
pub const MAX_USER_Q: u8 = 8;

/// Fila de entrada de processos comuns
pub const USER_Q: u8 = 10;

/// Pior fila da banda de usuário (limite da demoção; a fila 15 fica
/// reservada para idle, como no layout de filas do kernel)
pub const MIN_USER_Q: u8 = 14;

/// Quantum padrão para processos de usuário (ms)
pub const DEFAULT_USER_TIME_SLICE: u32 = 200;

/// Período da varredura de envelhecimento (ms)
pub const BALANCE_TIMEOUT_MS: u64 = 5000;

/// Capacidade da arena de processos
pub const NR_PROCS: usize = 256;

/// Número máximo de CPUs gerenciadas
pub const MAX_CPUS: usize = 8;

/// Saldo mínimo de bilhetes de loteria
pub const TICKETS_MIN: u8 = 1;

/// Saldo máximo de bilhetes de loteria
pub const TICKETS_MAX: u8 = 50;

/// Saldo inicial concedido no registro
pub const TICKETS_INIT: u8 = 3;

/// Contribuição por processo elegível ao pool, por classe sorteada
pub const LOTTERY_CLASS_WEIGHTS: [u32; 3] = [50, 20, 3];
