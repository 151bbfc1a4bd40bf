use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::template::template::PromptTemplate;
use crate::value::Value;

/// On-disk JSON mirror of the prompt template. Every field is optional;
/// omitted fields keep the template's empty defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PromptDefinition {
    pub context: String,
    pub purpose: String,
    pub goal: String,
    pub instructions: InstructionsDefinition,
    pub considerations: Vec<String>,
    pub struggles: Vec<StruggleDefinition>,
    pub input: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InstructionsDefinition {
    pub input: InputSectionDefinition,
    pub output: OutputSectionDefinition,
    pub howto: HowtoSectionDefinition,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InputSectionDefinition {
    pub definition: String,
    pub structure: String,
    #[serde(rename = "value-meaning")]
    pub value_meaning: String,
    #[serde(rename = "possible-values")]
    pub possible_values: String,
    #[serde(rename = "if-instructions-per-type")]
    pub per_type_instructions: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputSectionDefinition {
    pub definition: String,
    pub structure: String,
    #[serde(rename = "value-meaning")]
    pub value_meaning: String,
    #[serde(rename = "possible-values")]
    pub possible_values: String,
    #[serde(rename = "if-instructions-per-type")]
    pub per_type_instructions: Vec<serde_json::Value>,
    #[serde(rename = "example-valid-output")]
    pub example_valid_output: String,
    #[serde(rename = "example-invalid-output")]
    pub example_invalid_output: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HowtoSectionDefinition {
    pub definition: String,
    pub steps: Vec<String>,
    #[serde(rename = "corner-cases")]
    pub corner_cases: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StruggleDefinition {
    pub definition: String,
    pub helper: String,
}

impl PromptDefinition {
    /// Reads and parses a JSON definition file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!("loading prompt definition from {}", path.display());
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let definition = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(definition)
    }

    /// Builds a template by applying every field through the setter
    /// surface.
    pub fn into_template(self) -> PromptTemplate {
        let mut template = PromptTemplate::new();
        template.set_context(self.context);
        template.set_purpose(self.purpose);
        template.set_goal(self.goal);
        template.set_input(self.input);
        for consideration in self.considerations {
            template.add_consideration(consideration);
        }
        for struggle in self.struggles {
            template.add_struggle(struggle.definition, struggle.helper);
        }

        let input = self.instructions.input;
        template.set_input_definition(input.definition);
        template.set_input_structure(input.structure);
        template.set_input_value_meaning(input.value_meaning);
        template.set_input_possible_values(input.possible_values);
        template.set_input_per_type_instructions(
            input
                .per_type_instructions
                .into_iter()
                .map(Value::from)
                .collect(),
        );

        let output = self.instructions.output;
        template.set_output_definition(output.definition);
        template.set_output_structure(output.structure);
        template.set_output_value_meaning(output.value_meaning);
        template.set_output_possible_values(output.possible_values);
        template.set_output_per_type_instructions(
            output
                .per_type_instructions
                .into_iter()
                .map(Value::from)
                .collect(),
        );
        template.set_output_example_valid(output.example_valid_output);
        template.set_output_example_invalid(output.example_invalid_output);

        let howto = self.instructions.howto;
        template.set_howto_definition(howto.definition);
        template.set_howto_steps(howto.steps);
        template.set_howto_corner_cases(howto.corner_cases);

        template
    }
}
