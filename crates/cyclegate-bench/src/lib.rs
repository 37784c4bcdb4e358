//! Benchmark support for cyclegate: deterministic edge-list generators.
//!
//! Everything here is input generation; the benchmarks themselves live in
//! `benches/`.

pub mod generator;
