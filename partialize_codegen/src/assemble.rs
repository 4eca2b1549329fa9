use crate::model::{DeclKind, Member, OpaqueMember, PropertyMember};

/// Parameterless constructor for value types that keep an initializer; they
/// can't have initializers without an explicit constructor.
pub fn synthesized_constructor(kind: DeclKind, target_name: &str, retained_initializer: bool) -> Option<Member> {
    if !kind.is_value_type() || !retained_initializer {
        return None
    }
    Some(Member::Constructor(OpaqueMember {
        name: target_name.to_owned(),
        source: format!("public {target_name}()\n{{\n}}"),
        documentation: None,
    }))
}

/// Properties, then pulled members, then the constructor, stably sorted by
/// [Member::rank].
pub fn assemble_members(
    properties: Vec<PropertyMember>,
    closure: Vec<Member>,
    constructor: Option<Member>,
) -> Vec<Member> {
    let mut members: Vec<Member> = properties.into_iter()
        .map(Member::Property)
        .chain(closure)
        .chain(constructor)
        .collect();
    members.sort_by_key(Member::rank);
    members
}
