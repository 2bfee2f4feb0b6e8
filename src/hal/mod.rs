//! Interfaces dos colaboradores externos.
//!
//! O servidor não executa processos nem possui um timer próprio: ele decide
//! a política e delega a aplicação. Cada colaborador entra por um trait,
//! implementado pelo hospedeiro real e pelos mocks dos testes.

pub mod traits;

pub use traits::*;
