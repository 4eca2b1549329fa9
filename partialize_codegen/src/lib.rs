//! Core of the `partialize` crate: a declaration model and the transformation
//! that derives a "partial" shadow declaration from it.
//!
//! Given
//! ```text
//! [Partial]
//! public class Model
//! {
//!     public string Name { get; set; }
//! }
//! ```
//! [transform] produces the tree for
//! ```text
//! public partial class PartialModel
//! {
//!     public string? Name { get; set; }
//! }
//! ```
//! Nothing here does I/O or keeps state between calls: equal inputs give equal
//! outputs, so hosts may cache and parallelize freely.

mod assemble;
mod classify;
mod closure;
mod constraints;
mod decl_extensions;
mod expr;
mod markers;
mod model;
mod rewrite;
mod synthesize;
mod type_expr;

pub use crate::decl_extensions::{IAttrExt, IDeclExt, IPropertyExt};
pub use crate::expr::Expr;
pub use crate::markers::{
    GenerationConfig, MARKERS, Marker, MarkerDefinition, MarkerParameter, NameMatch, PartialReferenceMapping,
    PropertyMarkers,
};
pub use crate::model::{
    Accessor, AccessorBody, AccessorKind, Attribute, AttributeArgument, Candidate, Constraint, ConstraintClause,
    DeclKind, Documentation, LexicalContext, Member, Modifier, Namespace, OpaqueMember, PropertyBody,
    PropertyMember, TypeDeclaration,
};
pub use crate::synthesize::{GENERATED_FILE_SUFFIX, GeneratedDeclaration};
pub use crate::type_expr::{TupleElement, TypeExpr};

use crate::assemble::{assemble_members, synthesized_constructor};
use crate::classify::classify_property;
use crate::closure::resolve_closure;
use crate::rewrite::rewrite_references;
use crate::synthesize::synthesize_declaration;

////////////////////////////////////////////

/// Derives the partial declaration of `candidate` under `config`.
///
/// Returns `None`, without complaint, when the declaration has no properties
/// or is of a kind that has no partial form (interfaces, unknown kinds).
pub fn transform(candidate: &Candidate, config: &GenerationConfig) -> Option<GeneratedDeclaration> {
    let original = &candidate.declaration;
    if original.kind.keyword().is_none() {
        #[cfg(feature = "tracing")]
        tracing::debug!(name = %original.name, kind = ?original.kind, "skipping declaration of unsupported kind");
        return None
    }
    if !original.has_properties() {
        #[cfg(feature = "tracing")]
        tracing::debug!(name = %original.name, "skipping declaration without properties");
        return None
    }

    let mut retained_initializer = false;
    let mut properties = Vec::new();
    for property in original.properties() {
        let markers = PropertyMarkers::from_attrs(&property.attributes);
        let classified = classify_property(property, &markers, config);
        retained_initializer |= classified.retained_initializer;

        let mut output = classified.property;
        if let Some(mapping) = &markers.reference {
            rewrite_references(&mut output, mapping);
        }
        properties.push(output);
    }

    let closure = resolve_closure(original);
    let constructor = synthesized_constructor(original.kind, &config.target_name, retained_initializer);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        name = %original.name,
        target = %config.target_name,
        properties = properties.len(),
        pulled = closure.len(),
        constructor = constructor.is_some(),
        "assembling partial declaration"
    );

    let members = assemble_members(properties, closure, constructor);
    Some(synthesize_declaration(candidate, config, members))
}

/// Like [transform], reading the configuration from the declaration's own
/// `Partial` marker (or defaults when it has none).
pub fn generate(candidate: &Candidate) -> Option<GeneratedDeclaration> {
    let declaration = &candidate.declaration;
    let config = GenerationConfig::from_attrs(&declaration.name, &declaration.attributes);
    transform(candidate, &config)
}
