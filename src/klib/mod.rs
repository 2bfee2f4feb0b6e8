//! Utilitários Internos
//!
//! Peças pequenas e sem dependências usadas pelo núcleo da política.

pub mod rand;
