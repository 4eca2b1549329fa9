use serde::{Deserialize, Serialize};

use partialize_codegen::{Candidate, GeneratedDeclaration, IDeclExt, LexicalContext, Namespace, TypeDeclaration};

use crate::printer::print;

/// The front end's view of one source file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    #[serde(default)]
    pub usings: Vec<String>,
    #[serde(default)]
    pub namespace: Option<Namespace>,
    #[serde(default)]
    pub declarations: Vec<TypeDeclaration>,
}

impl SourceFile {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn from_json_value(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    pub fn context(&self) -> LexicalContext {
        LexicalContext { usings: self.usings.clone(), namespace: self.namespace.clone() }
    }

    /// Declarations carrying the `Partial` marker and at least one property
    pub fn candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.declarations.iter()
            .filter(|declaration| declaration.is_marked_partial() && declaration.has_properties())
            .map(|declaration| Candidate { context: self.context(), declaration: declaration.clone() })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedFile {
    /// `<target name>.g.cs`
    pub hint_name: String,
    pub source: String,
    pub declaration: GeneratedDeclaration,
}

/// Generates one file per candidate across `files`. When two candidates end up
/// with the same hint name, the first one wins.
pub fn run(files: &[SourceFile]) -> Vec<GeneratedFile> {
    let mut generated = Vec::<GeneratedFile>::new();
    for candidate in files.iter().flat_map(SourceFile::candidates) {
        let Some(declaration) = partialize_codegen::generate(&candidate) else {
            continue
        };
        if generated.iter().any(|file| file.hint_name == declaration.hint_name) {
            continue
        }
        generated.push(GeneratedFile {
            hint_name: declaration.hint_name.clone(),
            source: print(&declaration),
            declaration,
        });
    }
    generated
}
