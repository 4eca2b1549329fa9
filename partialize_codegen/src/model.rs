use serde::{Deserialize, Serialize};

use crate::expr::Expr;
use crate::type_expr::TypeExpr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Class,
    Struct,
    Record,
    RecordStruct,
    Interface,
    /// Anything else the front end reports; never transformed
    #[serde(other)]
    Unknown,
}

impl DeclKind {
    /// The declaration keyword, or `None` for kinds that never get a partial
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Class => Some("class"),
            Self::Struct => Some("struct"),
            Self::Record => Some("record"),
            Self::RecordStruct => Some("record struct"),
            Self::Interface | Self::Unknown => None,
        }
    }

    pub fn is_value_type(self) -> bool {
        matches!(self, Self::Struct | Self::RecordStruct)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Internal,
    Private,
    File,
    Static,
    Readonly,
    Required,
    Virtual,
    Override,
    Abstract,
    Sealed,
    New,
    Partial,
    Unsafe,
    Extern,
    Volatile,
    Const,
    Ref,
    Async,
}

impl Modifier {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::Private => "private",
            Self::File => "file",
            Self::Static => "static",
            Self::Readonly => "readonly",
            Self::Required => "required",
            Self::Virtual => "virtual",
            Self::Override => "override",
            Self::Abstract => "abstract",
            Self::Sealed => "sealed",
            Self::New => "new",
            Self::Partial => "partial",
            Self::Unsafe => "unsafe",
            Self::Extern => "extern",
            Self::Volatile => "volatile",
            Self::Const => "const",
            Self::Ref => "ref",
            Self::Async => "async",
        }
    }
}

/// Leading documentation comment, verbatim (`/// <summary>...`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Documentation(pub String);

impl Documentation {
    /// A `<summary>` doc comment wrapping `text`
    pub fn summary(text: &str) -> Self {
        let mut lines = vec!["/// <summary>".to_owned()];
        lines.extend(text.lines().map(|line| format!("/// {}", line.trim())));
        lines.push("/// </summary>".to_owned());
        Self(lines.join("\n"))
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines().map(str::trim).filter(|line| !line.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeArgument {
    /// `Summary` in `Summary = "..."`; `None` for positional arguments
    #[serde(default)]
    pub name: Option<String>,
    pub value: Expr,
}

/// An attribute as written, e.g. `Partial(Summary = "Patch payload")`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<AttributeArgument>,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), arguments: Vec::new() }
    }

    pub fn positional(mut self, value: impl Into<Expr>) -> Self {
        self.arguments.push(AttributeArgument { name: None, value: value.into() });
        self
    }

    pub fn named(mut self, name: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.arguments.push(AttributeArgument { name: Some(name.into()), value: value.into() });
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessorKind {
    Get,
    Set,
    Init,
}

impl AccessorKind {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::Init => "init",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorBody {
    /// `{ return _name; }`, braces included
    Block(Expr),
    /// `=> _name`, arrow excluded
    Expression(Expr),
}

impl AccessorBody {
    pub fn expr(&self) -> &Expr {
        match self {
            Self::Block(expr) | Self::Expression(expr) => expr,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Accessor {
    pub kind: AccessorKind,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub body: Option<AccessorBody>,
}

impl Accessor {
    pub fn auto(kind: AccessorKind) -> Self {
        Self { kind, modifiers: Vec::new(), body: None }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyBody {
    Accessors(Vec<Accessor>),
    /// `=> First + Last`, arrow excluded
    Expression(Expr),
}

impl Default for PropertyBody {
    fn default() -> Self {
        Self::Accessors(vec![Accessor::auto(AccessorKind::Get), Accessor::auto(AccessorKind::Set)])
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyMember {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub initializer: Option<Expr>,
    #[serde(default)]
    pub body: PropertyBody,
    #[serde(default)]
    pub documentation: Option<Documentation>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl PropertyMember {
    /// A public `{ get; set; }` property
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: vec![Modifier::Public],
            initializer: None,
            body: PropertyBody::default(),
            documentation: None,
            attributes: Vec::new(),
        }
    }

    /// Every expression owned by this property: initializer, expression body
    /// and accessor bodies
    pub fn expressions(&self) -> impl Iterator<Item = &Expr> {
        let bodies: Vec<&Expr> = match &self.body {
            PropertyBody::Expression(expr) => vec![expr],
            PropertyBody::Accessors(accessors) => accessors.iter()
                .filter_map(|accessor| accessor.body.as_ref().map(AccessorBody::expr))
                .collect(),
        };
        self.initializer.iter().chain(bodies)
    }
}

/// A member kept verbatim: its name (for lookups) and its full source text.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpaqueMember {
    #[serde(default)]
    pub name: String,
    pub source: String,
    #[serde(default)]
    pub documentation: Option<Documentation>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum Member {
    Field(OpaqueMember),
    Property(PropertyMember),
    Method(OpaqueMember),
    Constructor(OpaqueMember),
    /// Events, indexers, nested types, operators...
    Other(OpaqueMember),
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Self::Property(property) => &property.name,
            Self::Field(member) | Self::Method(member) | Self::Constructor(member) | Self::Other(member) => {
                &member.name
            },
        }
    }

    /// Ordering rank in generated bodies: fields, properties, methods, the rest
    pub fn rank(&self) -> u8 {
        match self {
            Self::Field(_) => 0,
            Self::Property(_) => 1,
            Self::Method(_) => 2,
            Self::Constructor(_) | Self::Other(_) => 3,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    NotNull,
    Class,
    /// `class?`
    NullableClass,
    Struct,
    Unmanaged,
    Default,
    /// `new()`
    New,
    Type(TypeExpr),
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotNull => f.write_str("notnull"),
            Self::Class => f.write_str("class"),
            Self::NullableClass => f.write_str("class?"),
            Self::Struct => f.write_str("struct"),
            Self::Unmanaged => f.write_str("unmanaged"),
            Self::Default => f.write_str("default"),
            Self::New => f.write_str("new()"),
            Self::Type(ty) => write!(f, "{ty}"),
        }
    }
}

/// `where T : class, notnull`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstraintClause {
    pub parameter: String,
    pub constraints: Vec<Constraint>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeDeclaration {
    pub kind: DeclKind,
    pub name: String,
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub constraint_clauses: Vec<ConstraintClause>,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub documentation: Option<Documentation>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl TypeDeclaration {
    pub fn new(kind: DeclKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            modifiers: vec![Modifier::Public],
            type_parameters: Vec::new(),
            constraint_clauses: Vec::new(),
            members: Vec::new(),
            documentation: None,
            attributes: Vec::new(),
        }
    }

    pub fn properties(&self) -> impl Iterator<Item = &PropertyMember> {
        self.members.iter().filter_map(|member| match member {
            Member::Property(property) => Some(property),
            _ => None,
        })
    }

    pub fn has_properties(&self) -> bool {
        self.properties().next().is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Namespace {
    pub name: String,
    /// `namespace Foo;` rather than `namespace Foo { ... }`
    #[serde(default)]
    pub file_scoped: bool,
}

/// What surrounds a declaration in its file and survives into the generated one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LexicalContext {
    /// Directives as written, e.g. `using System.Text.Json;`
    #[serde(default)]
    pub usings: Vec<String>,
    #[serde(default)]
    pub namespace: Option<Namespace>,
}

/// A declaration together with its lexical context.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub context: LexicalContext,
    pub declaration: TypeDeclaration,
}
