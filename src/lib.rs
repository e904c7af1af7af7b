//! RADIA+VOZ — asistente informativo para pacientes en radioterapia.
//!
//! The reproducible core lives here: the authored question [`catalog`], the
//! AI [`expand`] boundary over a chat-completion service ([`llm`],
//! [`prompts`]) and the read-aloud [`speech`] fragment builder. The Discord
//! presentation (binary `radia-bot`) wires these to slash commands.

pub mod catalog;
pub mod commands;
pub mod expand;
pub mod llm;
pub mod prompts;
pub mod speech;
pub mod state;
