use crate::decl_extensions::IPropertyExt;
use crate::markers::{GenerationConfig, PropertyMarkers};
use crate::model::{Modifier, PropertyMember};

pub struct ClassifiedProperty {
    pub property: PropertyMember,
    /// The initializer was carried over because of an `IncludeInitializer` marker
    pub retained_initializer: bool,
}

/// Decides the output form of one property.
///
/// The type is kept when it is already nullable, when the property is required
/// (keyword or marker), or when its initializer is kept; otherwise it becomes
/// nullable. The `required` keyword only survives with
/// `include_required_properties`. Marker attributes are not carried over.
pub fn classify_property(
    property: &PropertyMember,
    markers: &PropertyMarkers,
    config: &GenerationConfig,
) -> ClassifiedProperty {
    let is_required = markers.required || property.has_modifier(Modifier::Required);
    let retained_initializer = markers.include_initializer && property.initializer.is_some();

    let ty = if property.ty.is_nullable() || is_required || retained_initializer {
        property.ty.clone()
    } else {
        property.ty.clone().into_nullable()
    };

    let modifiers = property.modifiers.iter()
        .copied()
        .filter(|modifier| *modifier != Modifier::Required || config.include_required_properties)
        .collect();

    ClassifiedProperty {
        property: PropertyMember {
            name: property.name.clone(),
            ty,
            modifiers,
            initializer: if retained_initializer { property.initializer.clone() } else { None },
            body: property.body.clone(),
            documentation: property.documentation.clone(),
            attributes: Vec::new(),
        },
        retained_initializer,
    }
}
