use crate::markers::PartialReferenceMapping;
use crate::model::PropertyMember;
use crate::type_expr::TypeExpr;

/// Applies a `PartialReference` mapping to an already classified property.
pub fn rewrite_references(property: &mut PropertyMember, mapping: &PartialReferenceMapping) {
    substitute(&mut property.ty, &mapping.original, &mapping.partial);
    if let Some(property_name) = &mapping.property_name {
        property.name = property_name.clone();
    }
}

/// Named nodes match by name alone; their generic arguments are not compared.
fn refers_to(name: &str, original: &TypeExpr) -> bool {
    original.top_level_name() == Some(name)
}

/// Replaces, anywhere in `ty`, the named types that refer to `original`.
///
/// A bare replacement name inherits the (rewritten) generic arguments of the
/// node it replaces, so `Page<Foo>` mapped with `Page -> PartialPage` becomes
/// `PartialPage<Foo>`.
pub fn substitute(ty: &mut TypeExpr, original: &TypeExpr, replacement: &TypeExpr) {
    match ty {
        TypeExpr::Named { name, arguments } => {
            for argument in arguments.iter_mut() {
                substitute(argument, original, replacement);
            }
            if !refers_to(name, original) {
                return
            }
            let arguments = std::mem::take(arguments);
            *ty = match replacement {
                TypeExpr::Named { name: new_name, arguments: new_arguments } if new_arguments.is_empty() => {
                    TypeExpr::Named { name: new_name.clone(), arguments }
                },
                _ => replacement.clone(),
            };
        },
        TypeExpr::Nullable(inner) => {
            substitute(inner, original, replacement);
            // a nullable replacement under `?` collapses to a single wrapper
            if inner.is_nullable() {
                *ty = std::mem::replace(inner.as_mut(), TypeExpr::Tuple(Vec::new()));
            }
        },
        TypeExpr::Array { element, .. } => substitute(element, original, replacement),
        TypeExpr::Tuple(elements) => {
            for element in elements.iter_mut() {
                substitute(&mut element.ty, original, replacement);
            }
        },
    }
}
