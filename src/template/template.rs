use crate::template::fields;
use crate::value::{Container, Renderable, Value};

/// A known difficulty paired with helper text for getting past it. More
/// general than a corner case.
#[derive(Debug, Clone)]
pub struct Struggle {
    pub definition: String,
    pub helper: String,
}

impl Struggle {
    fn to_value(&self) -> Value {
        Value::Container(Container::Map(vec![
            (
                fields::DEFINITION.to_string(),
                Value::Text(self.definition.clone()),
            ),
            (fields::HELPER.to_string(), Value::Text(self.helper.clone())),
        ]))
    }
}

/// Instructions about the main input: what it is and how to read it.
#[derive(Debug, Clone, Default)]
pub struct InputInstructions {
    pub definition: String,
    pub structure: String,
    pub value_meaning: String,
    pub possible_values: String,
    pub per_type_instructions: Vec<Value>,
}

impl InputInstructions {
    fn to_value(&self) -> Value {
        Value::Container(Container::Map(vec![
            (
                fields::DEFINITION.to_string(),
                Value::Text(self.definition.clone()),
            ),
            (
                fields::STRUCTURE.to_string(),
                Value::Text(self.structure.clone()),
            ),
            (
                fields::VALUE_MEANING.to_string(),
                Value::Text(self.value_meaning.clone()),
            ),
            (
                fields::POSSIBLE_VALUES.to_string(),
                Value::Text(self.possible_values.clone()),
            ),
            (
                fields::PER_TYPE_INSTRUCTIONS.to_string(),
                Value::Container(Container::Seq(self.per_type_instructions.clone())),
            ),
        ]))
    }
}

/// Instructions about the expected output, including one valid and one
/// invalid example.
#[derive(Debug, Clone, Default)]
pub struct OutputInstructions {
    pub definition: String,
    pub structure: String,
    pub value_meaning: String,
    pub possible_values: String,
    pub per_type_instructions: Vec<Value>,
    pub example_valid_output: String,
    pub example_invalid_output: String,
}

impl OutputInstructions {
    fn to_value(&self) -> Value {
        Value::Container(Container::Map(vec![
            (
                fields::DEFINITION.to_string(),
                Value::Text(self.definition.clone()),
            ),
            (
                fields::STRUCTURE.to_string(),
                Value::Text(self.structure.clone()),
            ),
            (
                fields::VALUE_MEANING.to_string(),
                Value::Text(self.value_meaning.clone()),
            ),
            (
                fields::POSSIBLE_VALUES.to_string(),
                Value::Text(self.possible_values.clone()),
            ),
            (
                fields::PER_TYPE_INSTRUCTIONS.to_string(),
                Value::Container(Container::Seq(self.per_type_instructions.clone())),
            ),
            (
                fields::EXAMPLE_VALID_OUTPUT.to_string(),
                Value::Text(self.example_valid_output.clone()),
            ),
            (
                fields::EXAMPLE_INVALID_OUTPUT.to_string(),
                Value::Text(self.example_invalid_output.clone()),
            ),
        ]))
    }
}

/// How to get from the input to the output: a short definition, steps, and
/// corner cases where applicable.
#[derive(Debug, Clone, Default)]
pub struct HowtoInstructions {
    pub definition: String,
    pub steps: Vec<String>,
    pub corner_cases: Vec<String>,
}

impl HowtoInstructions {
    fn to_value(&self) -> Value {
        Value::Container(Container::Map(vec![
            (
                fields::DEFINITION.to_string(),
                Value::Text(self.definition.clone()),
            ),
            (
                fields::STEPS.to_string(),
                Value::Container(Container::Seq(
                    self.steps.iter().map(|step| step.as_str().into()).collect(),
                )),
            ),
            (
                fields::CORNER_CASES.to_string(),
                Value::Container(Container::Seq(
                    self.corner_cases
                        .iter()
                        .map(|case| case.as_str().into())
                        .collect(),
                )),
            ),
        ]))
    }
}

/// The three fixed instruction sections, rendered in this order.
#[derive(Debug, Clone, Default)]
pub struct Instructions {
    pub input: InputInstructions,
    pub output: OutputInstructions,
    pub howto: HowtoInstructions,
}

impl Instructions {
    fn to_value(&self) -> Value {
        Value::Container(Container::Map(vec![
            (fields::INPUT.to_string(), self.input.to_value()),
            (fields::OUTPUT.to_string(), self.output.to_value()),
            (fields::HOWTO.to_string(), self.howto.to_value()),
        ]))
    }
}

/// Fixed-shape prompt document assembled through setters.
///
/// Field order — context, purpose, goal, instructions, considerations,
/// struggles, input — is part of the output contract. An empty template
/// still renders the full skeleton.
#[derive(Debug, Clone, Default)]
pub struct PromptTemplate {
    context: String,
    purpose: String,
    goal: String,
    instructions: Instructions,
    considerations: Vec<String>,
    struggles: Vec<Struggle>,
    input: String,
}

impl PromptTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_context(&mut self, context: impl Into<String>) {
        self.context = context.into();
    }

    pub fn set_purpose(&mut self, purpose: impl Into<String>) {
        self.purpose = purpose.into();
    }

    pub fn set_goal(&mut self, goal: impl Into<String>) {
        self.goal = goal.into();
    }

    /// The main text input the prompt operates on.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Something the model shall weigh while working on the prompt.
    pub fn add_consideration(&mut self, consideration: impl Into<String>) {
        self.considerations.push(consideration.into());
    }

    /// Helper text for a known difficulty.
    pub fn add_struggle(&mut self, definition: impl Into<String>, helper: impl Into<String>) {
        self.struggles.push(Struggle {
            definition: definition.into(),
            helper: helper.into(),
        });
    }

    pub fn set_input_definition(&mut self, definition: impl Into<String>) {
        self.instructions.input.definition = definition.into();
    }

    pub fn set_input_structure(&mut self, structure: impl Into<String>) {
        self.instructions.input.structure = structure.into();
    }

    pub fn set_input_value_meaning(&mut self, value_meaning: impl Into<String>) {
        self.instructions.input.value_meaning = value_meaning.into();
    }

    pub fn set_input_possible_values(&mut self, possible_values: impl Into<String>) {
        self.instructions.input.possible_values = possible_values.into();
    }

    /// Per-type instructions can be arbitrarily structured, so they take
    /// whole values rather than plain text.
    pub fn set_input_per_type_instructions(&mut self, instructions: Vec<Value>) {
        self.instructions.input.per_type_instructions = instructions;
    }

    pub fn set_output_definition(&mut self, definition: impl Into<String>) {
        self.instructions.output.definition = definition.into();
    }

    pub fn set_output_structure(&mut self, structure: impl Into<String>) {
        self.instructions.output.structure = structure.into();
    }

    pub fn set_output_value_meaning(&mut self, value_meaning: impl Into<String>) {
        self.instructions.output.value_meaning = value_meaning.into();
    }

    pub fn set_output_possible_values(&mut self, possible_values: impl Into<String>) {
        self.instructions.output.possible_values = possible_values.into();
    }

    pub fn set_output_per_type_instructions(&mut self, instructions: Vec<Value>) {
        self.instructions.output.per_type_instructions = instructions;
    }

    pub fn set_output_example_valid(&mut self, example: impl Into<String>) {
        self.instructions.output.example_valid_output = example.into();
    }

    pub fn set_output_example_invalid(&mut self, example: impl Into<String>) {
        self.instructions.output.example_invalid_output = example.into();
    }

    pub fn set_howto_definition(&mut self, definition: impl Into<String>) {
        self.instructions.howto.definition = definition.into();
    }

    pub fn set_howto_steps(&mut self, steps: Vec<String>) {
        self.instructions.howto.steps = steps;
    }

    pub fn set_howto_corner_cases(&mut self, corner_cases: Vec<String>) {
        self.instructions.howto.corner_cases = corner_cases;
    }
}

impl Renderable for PromptTemplate {
    fn fields(&self) -> Vec<(String, Value)> {
        vec![
            (
                fields::CONTEXT.to_string(),
                Value::Text(self.context.clone()),
            ),
            (
                fields::PURPOSE.to_string(),
                Value::Text(self.purpose.clone()),
            ),
            (fields::GOAL.to_string(), Value::Text(self.goal.clone())),
            (
                fields::INSTRUCTIONS.to_string(),
                self.instructions.to_value(),
            ),
            (
                fields::CONSIDERATIONS.to_string(),
                Value::Container(Container::Seq(
                    self.considerations
                        .iter()
                        .map(|consideration| consideration.as_str().into())
                        .collect(),
                )),
            ),
            (
                fields::STRUGGLES.to_string(),
                Value::Container(Container::Seq(
                    self.struggles.iter().map(Struggle::to_value).collect(),
                )),
            ),
            (fields::INPUT.to_string(), Value::Text(self.input.clone())),
        ]
    }
}
