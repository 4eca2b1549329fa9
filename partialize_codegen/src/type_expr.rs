use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};

/// The type written on a member, kept as a tree so that named types can be
/// substituted in place, including inside generic arguments.
///
/// Serializes as its source text, e.g. `"Dictionary<string, List<Foo>>?"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeExpr {
    /// `Foo`, `System.String`, `List<Foo>`
    Named { name: String, arguments: Vec<TypeExpr> },
    /// `Foo?`
    Nullable(Box<TypeExpr>),
    /// `Foo[]`, `Foo[,]`
    Array { element: Box<TypeExpr>, rank: usize },
    /// `(int Count, string)`
    Tuple(Vec<TupleElement>),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TupleElement {
    pub ty: TypeExpr,
    pub name: Option<String>,
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named { name: name.into(), arguments: Vec::new() }
    }

    /// Name of the outermost named type, ignoring its generic arguments
    pub fn top_level_name(&self) -> Option<&str> {
        match self {
            Self::Named { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Nullable(_))
    }

    pub fn into_nullable(self) -> Self {
        if self.is_nullable() {
            return self
        }
        Self::Nullable(Box::new(self))
    }
}

fn parse_type_name(input: ParseStream) -> syn::Result<String> {
    let mut name = syn::Ident::parse_any(input)?.to_string();
    loop {
        if input.peek(syn::Token![::]) {
            input.parse::<syn::Token![::]>()?;
            name.push_str("::");
        } else if input.peek(syn::Token![.]) {
            input.parse::<syn::Token![.]>()?;
            name.push('.');
        } else {
            break
        }
        name.push_str(&syn::Ident::parse_any(input)?.to_string());
    }
    Ok(name)
}

fn parse_type_arguments(input: ParseStream) -> syn::Result<Vec<TypeExpr>> {
    input.parse::<syn::Token![<]>()?;
    let mut arguments = Vec::new();

    // unbound names like `Dictionary<,>` have no arguments to keep
    while input.peek(syn::Token![,]) {
        input.parse::<syn::Token![,]>()?;
    }
    if input.peek(syn::Token![>]) {
        input.parse::<syn::Token![>]>()?;
        return Ok(arguments)
    }

    loop {
        arguments.push(input.parse()?);
        if input.peek(syn::Token![>]) {
            input.parse::<syn::Token![>]>()?;
            return Ok(arguments)
        }
        input.parse::<syn::Token![,]>()?;
    }
}

impl Parse for TupleElement {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let ty = input.parse()?;
        let name = if input.peek(syn::Ident::peek_any) {
            Some(syn::Ident::parse_any(input)?.to_string())
        } else {
            None
        };
        Ok(Self { ty, name })
    }
}

impl Parse for TypeExpr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut ty = if input.peek(syn::token::Paren) {
            let content;
            syn::parenthesized!(content in input);
            let elements = content.parse_terminated(TupleElement::parse, syn::Token![,])?;
            if elements.len() < 2 {
                return Err(syn::Error::new(content.span(), "Tuple types need at least two elements"))
            }
            Self::Tuple(elements.into_iter().collect())
        } else {
            let name = parse_type_name(input)?;
            let arguments = if input.peek(syn::Token![<]) {
                parse_type_arguments(input)?
            } else {
                Vec::new()
            };
            Self::Named { name, arguments }
        };

        loop {
            if input.peek(syn::Token![?]) {
                input.parse::<syn::Token![?]>()?;
                ty = Self::Nullable(Box::new(ty));
            } else if input.peek(syn::token::Bracket) {
                let content;
                syn::bracketed!(content in input);
                let mut rank = 1;
                while !content.is_empty() {
                    content.parse::<syn::Token![,]>()?;
                    rank += 1;
                }
                ty = Self::Array { element: Box::new(ty), rank };
            } else {
                break
            }
        }
        Ok(ty)
    }
}

impl FromStr for TypeExpr {
    type Err = syn::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        syn::parse_str(raw)
    }
}

impl TryFrom<String> for TypeExpr {
    type Error = syn::Error;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl From<TypeExpr> for String {
    fn from(ty: TypeExpr) -> Self {
        ty.to_string()
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { name, arguments } => {
                f.write_str(name)?;
                if arguments.is_empty() {
                    return Ok(())
                }
                f.write_str("<")?;
                for (idx, argument) in arguments.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                f.write_str(">")
            },
            Self::Nullable(inner) => write!(f, "{inner}?"),
            Self::Array { element, rank } => {
                write!(f, "{element}[{}]", ",".repeat(rank.saturating_sub(1)))
            },
            Self::Tuple(elements) => {
                f.write_str("(")?;
                for (idx, element) in elements.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", element.ty)?;
                    if let Some(name) = &element.name {
                        write!(f, " {name}")?;
                    }
                }
                f.write_str(")")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> TypeExpr {
        raw.parse().unwrap()
    }

    #[test]
    fn test_parse_nested_generics() {
        let ty = parse("Dictionary<string, List<Foo>>");
        assert_eq!(
            ty,
            TypeExpr::Named {
                name: "Dictionary".into(),
                arguments: vec![
                    TypeExpr::named("string"),
                    TypeExpr::Named { name: "List".into(), arguments: vec![TypeExpr::named("Foo")] },
                ],
            }
        );
        assert_eq!(ty.to_string(), "Dictionary<string, List<Foo>>");
    }

    #[test]
    fn test_parse_nullable_and_arrays() {
        let ty = parse("int?[]");
        assert_eq!(
            ty,
            TypeExpr::Array {
                element: Box::new(TypeExpr::Nullable(Box::new(TypeExpr::named("int")))),
                rank: 1,
            }
        );
        assert_eq!(parse("string[,]?").to_string(), "string[,]?");
    }

    #[test]
    fn test_parse_qualified_and_tuples() {
        assert_eq!(parse("global::System.String").top_level_name(), Some("global::System.String"));
        let tuple = parse("(int Count, string)?");
        assert_eq!(tuple.to_string(), "(int Count, string)?");
    }

    #[test]
    fn test_unbound_generic_has_no_arguments() {
        assert_eq!(parse("Dictionary<,>"), TypeExpr::named("Dictionary"));
        assert_eq!(parse("Foo<>"), TypeExpr::named("Foo"));
    }

    #[test]
    fn test_into_nullable_never_double_wraps() {
        let once = parse("string").into_nullable();
        assert_eq!(once.clone().into_nullable(), once);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("List<".parse::<TypeExpr>().is_err());
        assert!("".parse::<TypeExpr>().is_err());
    }
}
