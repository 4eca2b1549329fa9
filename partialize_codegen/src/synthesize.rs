use serde::{Deserialize, Serialize};

use crate::constraints::surviving_clauses;
use crate::markers::GenerationConfig;
use crate::model::{Candidate, LexicalContext, Member, Modifier, TypeDeclaration};

pub const GENERATED_FILE_SUFFIX: &str = ".g.cs";

/// A finished partial declaration and what the printer keeps around it: the
/// using directives, the namespace and a forced `#nullable enable`. Sibling
/// declarations of the original file are not part of it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedDeclaration {
    pub hint_name: String,
    pub context: LexicalContext,
    pub nullable_enable: bool,
    pub declaration: TypeDeclaration,
}

pub fn synthesize_declaration(
    candidate: &Candidate,
    config: &GenerationConfig,
    members: Vec<Member>,
) -> GeneratedDeclaration {
    let original = &candidate.declaration;

    let mut modifiers: Vec<Modifier> = original.modifiers.iter()
        .copied()
        .filter(|modifier| *modifier != Modifier::Partial)
        .collect();
    modifiers.push(Modifier::Partial);

    let documentation = config.summary_documentation()
        .or_else(|| original.documentation.clone());

    GeneratedDeclaration {
        hint_name: format!("{}{GENERATED_FILE_SUFFIX}", config.target_name),
        context: candidate.context.clone(),
        nullable_enable: true,
        declaration: TypeDeclaration {
            kind: original.kind,
            name: config.target_name.clone(),
            modifiers,
            type_parameters: original.type_parameters.clone(),
            constraint_clauses: surviving_clauses(&original.constraint_clauses),
            members,
            documentation,
            attributes: Vec::new(),
        },
    }
}
