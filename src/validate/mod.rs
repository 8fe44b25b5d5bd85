// src/validate/mod.rs
// ============================================================================
// Module: Structural Validators
// Description: Pure field-presence predicates over decoded JSON bodies.
// Purpose: Centralize the required-field shapes of pet-store resources.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Side-effect-free predicates checking required-field presence on decoded
//! response bodies. Validators have no internal state and no failure mode
//! beyond returning `false`.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod checks;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use checks::id_field;
pub use checks::list_shape;
pub use checks::order_structure;
pub use checks::pet_structure;
pub use checks::user_structure;
