use crate::utils::MentorError;

/// A learning module: a name plus the domain description that bounds what the
/// mentor is allowed to talk about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Module {
    pub name: &'static str,
    pub domain: &'static str,
}

// The fixed module set. Order here is display order.
const MODULES: &[Module] = &[
    Module {
        name: "Python",
        domain: "Python programming, syntax, data types, control flow, functions, OOP, file handling, libraries.",
    },
    Module {
        name: "SQL",
        domain: "SQL queries, joins, subqueries, constraints, indexing, normalization, databases.",
    },
    Module {
        name: "Power BI",
        domain: "Power BI dashboards, DAX, Power Query, data modeling, reports, visualizations.",
    },
    Module {
        name: "Exploratory Data Analysis (EDA)",
        domain: "Data cleaning, statistics, pandas, numpy, matplotlib, seaborn.",
    },
    Module {
        name: "Machine Learning (ML)",
        domain: "Supervised, unsupervised learning, feature engineering, evaluation, models.",
    },
    Module {
        name: "Deep Learning (DL)",
        domain: "Neural networks, CNN, RNN, backpropagation, TensorFlow, PyTorch.",
    },
    Module {
        name: "Generative AI (Gen AI)",
        domain: "LLMs, transformers, prompt engineering, fine-tuning, RAG.",
    },
    Module {
        name: "Agentic AI",
        domain: "LLM agents, tools, planning, reasoning, autonomous workflows.",
    },
];

/// Look up a module by its exact name
pub fn lookup(name: &str) -> Result<&'static Module, MentorError> {
    MODULES
        .iter()
        .find(|m| m.name == name)
        .ok_or_else(|| MentorError::InvalidModule(name.to_string()))
}

/// All modules in display order
pub fn all() -> &'static [Module] {
    MODULES
}

/// Module names in display order
pub fn names() -> Vec<&'static str> {
    MODULES.iter().map(|m| m.name).collect()
}
