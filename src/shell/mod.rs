// Composition root helpers for the binary.
//
// Responsibilities
// - Run the line based menu against a registry that `main` constructs and owns.

pub mod menu;
