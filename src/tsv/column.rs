use std::collections::HashMap;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CorpusError;

// The closed vocabulary of things a physical column can be declared as.
// "ignore" columns are carried for alignment but never projected by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    Words,
    Pos,
    Lemma,
    Tree,
    Chunk,
    Ne,
    Srl,
    Coref,
    Offset,
    Custom,
    Ignore,
}

impl ColumnRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Words => "words",
            Self::Pos => "pos",
            Self::Lemma => "lemma",
            Self::Tree => "tree",
            Self::Chunk => "chunk",
            Self::Ne => "ne",
            Self::Srl => "srl",
            Self::Coref => "coref",
            Self::Offset => "offset",
            Self::Custom => "custom",
            Self::Ignore => "ignore",
        }
    }
}

impl FromStr for ColumnRole {
    type Err = CorpusError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "words" => Ok(Self::Words),
            "pos" => Ok(Self::Pos),
            "lemma" => Ok(Self::Lemma),
            "tree" => Ok(Self::Tree),
            "chunk" => Ok(Self::Chunk),
            "ne" => Ok(Self::Ne),
            "srl" => Ok(Self::Srl),
            "coref" => Ok(Self::Coref),
            "offset" => Ok(Self::Offset),
            "custom" => Ok(Self::Custom),
            "ignore" => Ok(Self::Ignore),
            _ => Err(CorpusError::InvalidColumnRole(name.to_string())),
        }
    }
}

// Role -> column index map built from the declared role list, one role per
// physical column. A role declared twice keeps its last index, but the
// declaration order of the first occurrence is preserved for projection.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    declared: Vec<ColumnRole>,
    indices: HashMap<ColumnRole, usize>,
    width: usize,
}

impl ColumnMap {
    pub fn new(columntypes: &[&str]) -> Result<Self, CorpusError> {
        let mut declared = Vec::new();
        let mut indices = HashMap::new();

        for (index, name) in columntypes.iter().enumerate() {
            let role: ColumnRole = name.parse()?;
            if !declared.contains(&role) {
                declared.push(role);
            }
            indices.insert(role, index);
        }

        Ok(Self {
            declared,
            indices,
            width: columntypes.len(),
        })
    }

    // Number of physical columns every row must have.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn index_of(&self, role: ColumnRole) -> Option<usize> {
        self.indices.get(&role).copied()
    }

    // Column holding the word forms; falls back to the first column when no
    // "words" role was declared (the docstart check still needs a column).
    pub fn words_column(&self) -> usize {
        self.index_of(ColumnRole::Words).unwrap_or(0)
    }

    // Declared roles minus "ignore", in declaration order: the default
    // projection of token queries.
    pub fn data_roles(&self) -> Vec<ColumnRole> {
        self.declared
            .iter()
            .copied()
            .filter(|role| *role != ColumnRole::Ignore)
            .collect()
    }
}
