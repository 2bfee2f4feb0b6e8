//! Sink de diagnóstico plugável.
//!
//! Substitui a escrita direta na serial do kernel: o hospedeiro registra o
//! transporte uma única vez e as funções `emit_*` encaminham para ele.
//! Sem sink registrado (testes, início de boot) a saída é descartada.

use spin::Once;

/// Transporte de saída de diagnóstico.
pub trait DiagSink: Sync {
    /// Escreve uma fatia de texto, sem quebra de linha implícita.
    fn write_str(&self, s: &str);
}

static SINK: Once<&'static dyn DiagSink> = Once::new();

/// Registra o transporte de diagnóstico. Chamadas subsequentes são ignoradas.
pub fn register(sink: &'static dyn DiagSink) {
    SINK.call_once(|| sink);
}

/// Emite uma string literal.
pub fn emit_str(s: &str) {
    if let Some(sink) = SINK.get() {
        sink.write_str(s);
    }
}

/// Emite um valor em hexadecimal (prefixo 0x, sem zeros à esquerda).
pub fn emit_hex(value: u64) {
    let Some(sink) = SINK.get() else {
        return;
    };

    sink.write_str("0x");
    if value == 0 {
        sink.write_str("0");
        return;
    }

    const DIGITS: &[u8; 16] = b"0123456789abcdef";
    let mut out = [0u8; 16];
    let mut n = 0;
    let mut started = false;
    for shift in (0..16).rev() {
        let nib = ((value >> (shift * 4)) & 0xF) as usize;
        if nib != 0 {
            started = true;
        }
        if started {
            out[n] = DIGITS[nib];
            n += 1;
        }
    }
    if let Ok(s) = core::str::from_utf8(&out[..n]) {
        sink.write_str(s);
    }
}

/// Emite uma quebra de linha.
pub fn emit_nl() {
    emit_str("\n");
}
