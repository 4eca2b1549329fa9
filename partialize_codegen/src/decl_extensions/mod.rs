use crate::expr::Expr;
use crate::markers::Marker;
use crate::model::{Attribute, Member, Modifier, PropertyMember, TypeDeclaration};

pub trait IAttrExt {
    fn is_marker(&self, marker: Marker) -> bool;
    /// The argument called `name`, or else the one at `position` among the positional ones
    fn argument(&self, name: &str, position: Option<usize>) -> Option<&Expr>;
}

impl IAttrExt for Attribute {
    fn is_marker(&self, marker: Marker) -> bool {
        marker.definition().matches(&self.name)
    }

    fn argument(&self, name: &str, position: Option<usize>) -> Option<&Expr> {
        let by_name = self.arguments.iter()
            .find(|arg| arg.name.as_deref() == Some(name))
            .map(|arg| &arg.value);
        if by_name.is_some() {
            return by_name
        }
        let position = position?;
        self.arguments.iter()
            .filter(|arg| arg.name.is_none())
            .nth(position)
            .map(|arg| &arg.value)
    }
}

pub trait IPropertyExt {
    fn has_modifier(&self, modifier: Modifier) -> bool;
    fn referenced_names(&self) -> Vec<String>;
}

impl IPropertyExt for PropertyMember {
    fn has_modifier(&self, modifier: Modifier) -> bool {
        self.modifiers.contains(&modifier)
    }

    fn referenced_names(&self) -> Vec<String> {
        let mut names = Vec::<String>::new();
        for expr in self.expressions() {
            for name in expr.referenced_names() {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }
}

pub trait IDeclExt {
    fn is_marked_partial(&self) -> bool;
    /// First field or method called `name`
    fn field_or_method(&self, name: &str) -> Option<&Member>;
}

impl IDeclExt for TypeDeclaration {
    fn is_marked_partial(&self) -> bool {
        self.attributes.iter().any(|attr| attr.is_marker(Marker::Partial))
    }

    fn field_or_method(&self, name: &str) -> Option<&Member> {
        self.members.iter()
            .filter(|member| matches!(member, Member::Field(_) | Member::Method(_)))
            .find(|member| member.name() == name)
    }
}
