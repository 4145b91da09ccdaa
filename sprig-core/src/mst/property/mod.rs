//! Property-based tests for the sequential Kruskal implementation.
//!
//! Checks the heap-driven runner against a sort-based oracle, validates the
//! structural invariants of every forest it returns, verifies the cycle
//! optimality condition, and confirms that the total weight does not depend
//! on input order. Inputs cover several weight distributions and topologies.

mod equivalence;
mod helpers;
mod optimality;
mod oracle;
mod strategies;
mod structural;
mod types;
