//! Wire names of the fixed prompt-document shape. These are a contract with
//! consumers of the rendered markup; the renderer itself never inspects
//! them.

pub const CONTEXT: &str = "context";
pub const PURPOSE: &str = "purpose";
pub const GOAL: &str = "goal";
pub const INSTRUCTIONS: &str = "instructions";
pub const CONSIDERATIONS: &str = "considerations";
pub const STRUGGLES: &str = "struggles";
pub const INPUT: &str = "input";
pub const OUTPUT: &str = "output";
pub const HOWTO: &str = "howto";

pub const DEFINITION: &str = "definition";
pub const STRUCTURE: &str = "structure";
pub const VALUE_MEANING: &str = "value-meaning";
pub const POSSIBLE_VALUES: &str = "possible-values";
pub const PER_TYPE_INSTRUCTIONS: &str = "if-instructions-per-type";
pub const EXAMPLE_VALID_OUTPUT: &str = "example-valid-output";
pub const EXAMPLE_INVALID_OUTPUT: &str = "example-invalid-output";
pub const STEPS: &str = "steps";
pub const CORNER_CASES: &str = "corner-cases";
pub const HELPER: &str = "helper";
