// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only:
//   - no parsing (Layer 4), no scoring (Layer 5)
//   - no printing (Layer 1 decides what reaches the terminal)
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The batch answering workflow
pub mod answer_use_case;

// The corpus inspection/debugging workflow
pub mod inspect_use_case;
