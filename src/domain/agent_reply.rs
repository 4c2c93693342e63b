/// One tool call made by the agent while answering a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub tool: String,
    pub input: String,
}

/// The agent's answer to one query, with the ordered trace of every tool it
/// invoked along the way. Ephemeral: consumed to derive the search flag and
/// discarded.
#[derive(Debug, Clone, Default)]
pub struct AgentReply {
    pub output: Option<String>,
    pub trace: Vec<ToolInvocation>,
}

impl AgentReply {
    pub fn invoked(&self, tool: &str) -> bool {
        self.trace.iter().any(|entry| entry.tool == tool)
    }
}
