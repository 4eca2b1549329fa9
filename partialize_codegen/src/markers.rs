use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};

use crate::decl_extensions::IAttrExt;
use crate::model::{Attribute, Documentation};
use crate::type_expr::TypeExpr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Triggers generation; carries the type-level configuration
    Partial,
    /// Keeps a property's type as is
    Required,
    /// Keeps a property's type and initializer as is
    IncludeInitializer,
    /// Swaps a referenced type (and maybe the property name) for its partial
    PartialReference,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameMatch {
    /// The name itself, with or without the `Attribute` suffix
    Exact,
    Prefix,
    CaseInsensitivePrefix,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerParameter {
    /// Name used in `Name = value` arguments
    pub name: &'static str,
    /// Index among the positional arguments; `None` for named-only parameters
    pub position: Option<usize>,
}

impl MarkerParameter {
    const fn positional(name: &'static str, position: usize) -> Self {
        Self { name, position: Some(position) }
    }

    const fn named(name: &'static str) -> Self {
        Self { name, position: None }
    }
}

pub struct MarkerDefinition {
    pub marker: Marker,
    pub name: &'static str,
    pub name_match: NameMatch,
    pub parameters: &'static [MarkerParameter],
}

/// Every marker recognized on declarations, indexed by [Marker].
pub static MARKERS: [MarkerDefinition; 4] = [
    MarkerDefinition {
        marker: Marker::Partial,
        name: "Partial",
        name_match: NameMatch::Exact,
        parameters: &[
            MarkerParameter::positional("Name", 0),
            MarkerParameter::named("Summary"),
            MarkerParameter::named("IncludeRequiredProperties"),
        ],
    },
    MarkerDefinition {
        marker: Marker::Required,
        name: "Required",
        name_match: NameMatch::CaseInsensitivePrefix,
        parameters: &[],
    },
    MarkerDefinition {
        marker: Marker::IncludeInitializer,
        name: "IncludeInitializer",
        name_match: NameMatch::Prefix,
        parameters: &[],
    },
    MarkerDefinition {
        marker: Marker::PartialReference,
        name: "PartialReference",
        name_match: NameMatch::Exact,
        parameters: &[
            MarkerParameter::positional("OriginalType", 0),
            MarkerParameter::positional("PartialType", 1),
            MarkerParameter::positional("PropertyName", 2),
        ],
    },
];

impl Marker {
    pub fn definition(self) -> &'static MarkerDefinition {
        &MARKERS[self as usize]
    }
}

impl MarkerDefinition {
    /// Matches on the attribute name as written. No symbol resolution happens,
    /// so `[RequiredIf]` counts as a `Required` marker.
    pub fn matches(&self, attribute_name: &str) -> bool {
        match self.name_match {
            NameMatch::Exact => {
                attribute_name == self.name
                    || attribute_name.strip_suffix("Attribute") == Some(self.name)
            },
            NameMatch::Prefix => attribute_name.starts_with(self.name),
            NameMatch::CaseInsensitivePrefix => attribute_name
                .get(..self.name.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(self.name)),
        }
    }
}

////////////////////////////////////////////

/// A string argument: `"Foo"` or `nameof(Foo)`
struct StringOperand(String);

impl Parse for StringOperand {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(syn::LitStr) {
            let lit: syn::LitStr = input.parse()?;
            return Ok(Self(lit.value()))
        }
        let operator = syn::Ident::parse_any(input)?;
        if operator != "nameof" {
            return Err(syn::Error::new(operator.span(), "Expected a string or nameof(..)"))
        }
        let content;
        syn::parenthesized!(content in input);
        let ty: TypeExpr = content.parse()?;
        let name = ty.top_level_name().unwrap_or_default();
        // nameof(Outer.Inner) is "Inner"
        let last_segment = name.rsplit(['.', ':']).next().unwrap_or(name);
        Ok(Self(last_segment.to_owned()))
    }
}

/// A type argument: `typeof(Foo)`, `nameof(Foo)` or `"Foo"`
struct TypeOperand(TypeExpr);

impl Parse for TypeOperand {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(syn::LitStr) {
            let lit: syn::LitStr = input.parse()?;
            return Ok(Self(lit.value().parse()?))
        }
        let operator = syn::Ident::parse_any(input)?;
        if operator != "typeof" && operator != "nameof" {
            return Err(syn::Error::new(operator.span(), "Expected typeof(..), nameof(..) or a string"))
        }
        let content;
        syn::parenthesized!(content in input);
        Ok(Self(content.parse()?))
    }
}

fn parse_string(attr: &Attribute, parameter: &MarkerParameter) -> Option<String> {
    let value = attr.argument(parameter.name, parameter.position)?;
    syn::parse_str::<StringOperand>(value.as_str()).ok().map(|operand| operand.0)
}

fn parse_bool(attr: &Attribute, parameter: &MarkerParameter) -> Option<bool> {
    let value = attr.argument(parameter.name, parameter.position)?;
    syn::parse_str::<syn::LitBool>(value.as_str()).ok().map(|lit| lit.value)
}

fn parse_type(attr: &Attribute, parameter: &MarkerParameter) -> Option<TypeExpr> {
    let value = attr.argument(parameter.name, parameter.position)?;
    syn::parse_str::<TypeOperand>(value.as_str()).ok().map(|operand| operand.0)
}

////////////////////////////////////////////

/// Type-level configuration, read from the `Partial` marker.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenerationConfig {
    /// Name of the generated type
    pub target_name: String,
    /// Replaces the inherited documentation
    pub summary: Option<String>,
    /// Keep the `required` keyword on required properties
    pub include_required_properties: bool,
}

impl GenerationConfig {
    pub fn for_type(type_name: &str) -> Self {
        Self {
            target_name: format!("Partial{type_name}"),
            summary: None,
            include_required_properties: false,
        }
    }

    /// Reads the first `Partial` marker in `attrs`. Values that don't parse
    /// fall back to their defaults.
    pub fn from_attrs(type_name: &str, attrs: &[Attribute]) -> Self {
        let mut config = Self::for_type(type_name);
        let Some(marker) = attrs.iter().find(|attr| attr.is_marker(Marker::Partial)) else {
            return config
        };
        let [name, summary, include_required] = Marker::Partial.definition().parameters else {
            return config
        };
        if let Some(target_name) = parse_string(marker, name) {
            config.target_name = target_name;
        }
        config.summary = parse_string(marker, summary);
        config.include_required_properties = parse_bool(marker, include_required).unwrap_or(false);
        config
    }

    pub fn summary_documentation(&self) -> Option<Documentation> {
        self.summary.as_deref().map(Documentation::summary)
    }
}

/// `PartialReference(typeof(Address), typeof(PartialAddress), "AddressPatch")`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PartialReferenceMapping {
    pub original: TypeExpr,
    pub partial: TypeExpr,
    pub property_name: Option<String>,
}

impl PartialReferenceMapping {
    pub fn try_from_attr(attr: &Attribute) -> Option<Self> {
        if !attr.is_marker(Marker::PartialReference) {
            return None
        }
        let [original, partial, property_name] = Marker::PartialReference.definition().parameters else {
            return None
        };
        Some(Self {
            original: parse_type(attr, original)?,
            partial: parse_type(attr, partial)?,
            property_name: parse_string(attr, property_name),
        })
    }
}

/// Property-level markers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PropertyMarkers {
    pub required: bool,
    pub include_initializer: bool,
    pub reference: Option<PartialReferenceMapping>,
}

impl PropertyMarkers {
    pub fn from_attrs(attrs: &[Attribute]) -> Self {
        Self {
            required: attrs.iter().any(|attr| attr.is_marker(Marker::Required)),
            include_initializer: attrs.iter().any(|attr| attr.is_marker(Marker::IncludeInitializer)),
            reference: attrs.iter().find_map(PartialReferenceMapping::try_from_attr),
        }
    }
}
