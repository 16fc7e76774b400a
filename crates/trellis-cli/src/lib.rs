//! Driver pieces of the Trellis CLI: argument parsing and artifact
//! persistence. The generation loop itself lives in `main.rs`.

pub mod cli;
pub mod writer;
