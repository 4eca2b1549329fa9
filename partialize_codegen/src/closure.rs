use crate::decl_extensions::{IDeclExt, IPropertyExt};
use crate::model::{Member, TypeDeclaration};

/// Fields and methods of `declaration` named directly inside any property's
/// initializer or bodies, copied verbatim in order of first reference.
///
/// Only one level deep: the pulled members' own bodies are not scanned, so they
/// may still mention members the generated type doesn't have.
pub fn resolve_closure(declaration: &TypeDeclaration) -> Vec<Member> {
    let mut pulled = Vec::<Member>::new();
    for property in declaration.properties() {
        for name in property.referenced_names() {
            if pulled.iter().any(|member| member.name() == name) {
                continue
            }
            if let Some(member) = declaration.field_or_method(&name) {
                pulled.push(member.clone());
            }
        }
    }
    pulled
}
