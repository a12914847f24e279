//! Storyloom — Narrator bounded context.
//!
//! Defines the `Narrator` port the turn orchestrator talks to, the two
//! implementations selected at startup (an OpenAI-compatible chat client and
//! a null narrator), and the parser for the structured reply.

pub mod null;
pub mod openai;
pub mod port;
pub mod prompt;
pub mod reply;
