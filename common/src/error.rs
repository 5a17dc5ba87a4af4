use std::io;

use thiserror::Error;

use crate::tools::Tool;

fn join_tools(tools: &[Tool]) -> String {
    tools
        .iter()
        .map(|tool| tool.program())
        .collect::<Vec<&str>>()
        .join(", ")
}

#[derive(Debug, Error)]
pub enum PulseError {
    #[error("required tool `{tool}` was not found on the search path")]
    ToolNotFound { tool: Tool },

    #[error("missing required tools: {}", join_tools(.0))]
    MissingTools(Vec<Tool>),

    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl PulseError {
    /// Tools this error reports as absent.
    pub fn missing_tools(&self) -> &[Tool] {
        match self {
            PulseError::ToolNotFound { tool } => std::slice::from_ref(tool),
            PulseError::MissingTools(tools) => tools,
            PulseError::Spawn { .. } => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_tool() {
        let err = PulseError::ToolNotFound { tool: Tool::ArpRequester };
        assert_eq!(
            err.to_string(),
            "required tool `arping` was not found on the search path"
        );
        assert_eq!(err.missing_tools(), &[Tool::ArpRequester]);
    }

    #[test]
    fn missing_tools_lists_every_tool() {
        let err = PulseError::MissingTools(Tool::ALL.to_vec());
        assert_eq!(err.to_string(), "missing required tools: hping3, arping");
        assert_eq!(err.missing_tools().len(), 2);
    }
}
