// =============================================================================
// SCHEDD LOGGING SYSTEM - ZERO OVERHEAD
// =============================================================================
//
// Sistema de logging do servidor de escalonamento com custo ZERO em release.
//
// ARQUITETURA:
// Mesmo esquema do kernel: features do Cargo fazem compile-time filtering e,
// com a feature "no_logs", TODOS os macros viram expressões vazias. A única
// diferença é o destino: em vez da serial, a saída vai para o sink de
// diagnóstico registrado pelo hospedeiro (ver diag/sink.rs).
//
// NÍVEIS DE LOG (do mais crítico ao menos):
// - ERROR: Erros fatais ou críticos
// - WARN:  Situações suspeitas mas recuperáveis
// - INFO:  Fluxo normal de execução
// - DEBUG: Informações de debugging
// - TRACE: Detalhes extremos (cada operação)
//
// COMO USAR:
//   kinfo!("(SchedD) Inicializando...");       // Apenas string
//   kinfo!("(SchedD) Endpoint=", ep.0);        // String + hex
//   klog!("Prio=", prio, " Quantum=", q);      // Múltiplos valores
//
// =============================================================================

// =============================================================================
// PREFIXOS COM CORES ANSI
// =============================================================================

pub const P_ERROR: &str = "\x1b[1;31m[ERRO]\x1b[0m ";
pub const P_WARN: &str = "\x1b[1;33m[WARN]\x1b[0m ";
pub const P_INFO: &str = "\x1b[32m[INFO]\x1b[0m ";
pub const P_DEBUG: &str = "\x1b[36m[DEBG]\x1b[0m ";
pub const P_TRACE: &str = "\x1b[35m[TRAC]\x1b[0m ";

// =============================================================================
// MACROS DE LOG - NÍVEL ERROR
// =============================================================================
//
// kerror! - Sempre ativo (exceto com no_logs)
//

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kerror {
    // Apenas string literal
    ($msg:expr) => {{
        $crate::diag::sink::emit_str($crate::diag::logging::P_ERROR);
        $crate::diag::sink::emit_str($msg);
        $crate::diag::sink::emit_nl();
    }};
    // String + valor hex
    ($msg:expr, $val:expr) => {{
        $crate::diag::sink::emit_str($crate::diag::logging::P_ERROR);
        $crate::diag::sink::emit_str($msg);
        $crate::diag::sink::emit_hex($val as u64);
        $crate::diag::sink::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kerror {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL WARN
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kwarn {
    ($msg:expr) => {{
        $crate::diag::sink::emit_str($crate::diag::logging::P_WARN);
        $crate::diag::sink::emit_str($msg);
        $crate::diag::sink::emit_nl();
    }};
    ($msg:expr, $val:expr) => {{
        $crate::diag::sink::emit_str($crate::diag::logging::P_WARN);
        $crate::diag::sink::emit_str($msg);
        $crate::diag::sink::emit_hex($val as u64);
        $crate::diag::sink::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kwarn {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL INFO
// =============================================================================

#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kinfo {
    ($msg:expr) => {{
        $crate::diag::sink::emit_str($crate::diag::logging::P_INFO);
        $crate::diag::sink::emit_str($msg);
        $crate::diag::sink::emit_nl();
    }};
    ($msg:expr, $val:expr) => {{
        $crate::diag::sink::emit_str($crate::diag::logging::P_INFO);
        $crate::diag::sink::emit_str($msg);
        $crate::diag::sink::emit_hex($val as u64);
        $crate::diag::sink::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kinfo {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL DEBUG
// =============================================================================

#[cfg(any(feature = "log_trace", feature = "log_debug"))]
#[macro_export]
macro_rules! kdebug {
    ($msg:expr) => {{
        $crate::diag::sink::emit_str($crate::diag::logging::P_DEBUG);
        $crate::diag::sink::emit_str($msg);
        $crate::diag::sink::emit_nl();
    }};
    ($msg:expr, $val:expr) => {{
        $crate::diag::sink::emit_str($crate::diag::logging::P_DEBUG);
        $crate::diag::sink::emit_str($msg);
        $crate::diag::sink::emit_hex($val as u64);
        $crate::diag::sink::emit_nl();
    }};
}

#[cfg(not(any(feature = "log_trace", feature = "log_debug")))]
#[macro_export]
macro_rules! kdebug {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS DE LOG - NÍVEL TRACE
// =============================================================================

#[cfg(feature = "log_trace")]
#[macro_export]
macro_rules! ktrace {
    ($msg:expr) => {{
        $crate::diag::sink::emit_str($crate::diag::logging::P_TRACE);
        $crate::diag::sink::emit_str($msg);
        $crate::diag::sink::emit_nl();
    }};
    ($msg:expr, $val:expr) => {{
        $crate::diag::sink::emit_str($crate::diag::logging::P_TRACE);
        $crate::diag::sink::emit_str($msg);
        $crate::diag::sink::emit_hex($val as u64);
        $crate::diag::sink::emit_nl();
    }};
}

#[cfg(not(feature = "log_trace"))]
#[macro_export]
macro_rules! ktrace {
    ($($t:tt)*) => {{}};
}

// =============================================================================
// MACROS AUXILIARES
// =============================================================================

/// klog! - Log genérico sem prefixo de nível.
///
/// Útil para construir logs complexos com múltiplos valores.
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! klog {
    // Apenas string
    ($msg:expr) => {{
        $crate::diag::sink::emit_str($msg);
    }};
    // String + hex
    ($msg:expr, $val:expr) => {{
        $crate::diag::sink::emit_str($msg);
        $crate::diag::sink::emit_hex($val as u64);
    }};
    // String + hex + string
    ($msg1:expr, $val:expr, $msg2:expr) => {{
        $crate::diag::sink::emit_str($msg1);
        $crate::diag::sink::emit_hex($val as u64);
        $crate::diag::sink::emit_str($msg2);
    }};
    // String + hex + string + hex
    ($msg1:expr, $val1:expr, $msg2:expr, $val2:expr) => {{
        $crate::diag::sink::emit_str($msg1);
        $crate::diag::sink::emit_hex($val1 as u64);
        $crate::diag::sink::emit_str($msg2);
        $crate::diag::sink::emit_hex($val2 as u64);
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! klog {
    ($($t:tt)*) => {{}};
}

/// knl! - Emite apenas newline.
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! knl {
    () => {{
        $crate::diag::sink::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! knl {
    () => {{}};
}

// =============================================================================
// MACROS DE STATUS (OK/FAIL)
// =============================================================================

/// kok! - Log de sucesso (prefixo verde [OK]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kok {
    ($msg:expr) => {{
        $crate::diag::sink::emit_str("\x1b[32m[OK]\x1b[0m ");
        $crate::diag::sink::emit_str($msg);
        $crate::diag::sink::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kok {
    ($($t:tt)*) => {{}};
}

/// kfail! - Log de falha (prefixo vermelho [FAIL]).
#[cfg(not(feature = "no_logs"))]
#[macro_export]
macro_rules! kfail {
    ($msg:expr) => {{
        $crate::diag::sink::emit_str("\x1b[1;31m[FAIL]\x1b[0m ");
        $crate::diag::sink::emit_str($msg);
        $crate::diag::sink::emit_nl();
    }};
}

#[cfg(feature = "no_logs")]
#[macro_export]
macro_rules! kfail {
    ($($t:tt)*) => {{}};
}
