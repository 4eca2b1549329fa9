use partialize_codegen::{
    Accessor, AccessorBody, Documentation, GeneratedDeclaration, Member, Modifier, OpaqueMember, PropertyBody,
    PropertyMember, TypeDeclaration,
};

pub const HEADER: &str = "\
// <auto-generated/>
// Generated by partialize. Changes to this file will be lost when it is regenerated.
";

const INDENT: &str = "    ";

struct Printer {
    out: String,
    depth: usize,
}

impl Printer {
    fn line(&mut self, text: &str) {
        let text = text.trim_end();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.out.push_str(INDENT);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Writes verbatim source at the current depth: the first line is trimmed
    /// and the rest lose their common indentation.
    fn verbatim(&mut self, source: &str) {
        let mut lines = source.trim().lines();
        let Some(first) = lines.next() else {
            return
        };
        let rest: Vec<&str> = lines.collect();
        let common_indent = rest.iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.len() - line.trim_start().len())
            .min()
            .unwrap_or(0);
        self.line(first.trim());
        for line in rest {
            self.line(line.get(common_indent..).unwrap_or_else(|| line.trim_start()));
        }
    }

    fn documentation(&mut self, documentation: Option<&Documentation>) {
        for line in documentation.into_iter().flat_map(Documentation::lines) {
            self.line(line);
        }
    }
}

fn modifiers_prefix(modifiers: &[Modifier]) -> String {
    modifiers.iter()
        .map(|modifier| format!("{} ", modifier.keyword()))
        .collect()
}

fn inline_accessor(accessor: &Accessor) -> String {
    let head = format!("{}{}", modifiers_prefix(&accessor.modifiers), accessor.kind.keyword());
    match &accessor.body {
        None => format!("{head};"),
        Some(AccessorBody::Expression(expr)) => format!("{head} => {expr};"),
        Some(AccessorBody::Block(block)) => format!("{head} {block}"),
    }
}

fn print_property(printer: &mut Printer, property: &PropertyMember) {
    printer.documentation(property.documentation.as_ref());
    let head = format!("{}{} {}", modifiers_prefix(&property.modifiers), property.ty, property.name);
    let initializer = property.initializer.as_ref()
        .map(|init| format!(" = {init};"))
        .unwrap_or_default();

    match &property.body {
        PropertyBody::Expression(expr) => printer.line(&format!("{head} => {expr};")),
        PropertyBody::Accessors(accessors) if accessors.iter().all(|accessor| accessor.body.is_none()) => {
            let accessors: Vec<String> = accessors.iter().map(inline_accessor).collect();
            printer.line(&format!("{head} {{ {} }}{initializer}", accessors.join(" ")));
        },
        PropertyBody::Accessors(accessors) => {
            printer.line(&head);
            printer.line("{");
            printer.depth += 1;
            for accessor in accessors {
                match &accessor.body {
                    Some(AccessorBody::Block(block)) if block.as_str().contains('\n') => {
                        printer.line(&format!("{}{}", modifiers_prefix(&accessor.modifiers), accessor.kind.keyword()));
                        printer.verbatim(block.as_str());
                    },
                    _ => printer.line(&inline_accessor(accessor)),
                }
            }
            printer.depth -= 1;
            printer.line(&format!("}}{initializer}"));
        },
    }
}

fn print_opaque(printer: &mut Printer, member: &OpaqueMember) {
    printer.documentation(member.documentation.as_ref());
    printer.verbatim(&member.source);
}

fn print_declaration(printer: &mut Printer, declaration: &TypeDeclaration) {
    let Some(keyword) = declaration.kind.keyword() else {
        return
    };
    printer.documentation(declaration.documentation.as_ref());

    let generics = if declaration.type_parameters.is_empty() {
        String::new()
    } else {
        format!("<{}>", declaration.type_parameters.join(", "))
    };
    printer.line(&format!("{}{keyword} {}{generics}", modifiers_prefix(&declaration.modifiers), declaration.name));

    printer.depth += 1;
    for clause in &declaration.constraint_clauses {
        let constraints: Vec<String> = clause.constraints.iter().map(ToString::to_string).collect();
        printer.line(&format!("where {} : {}", clause.parameter, constraints.join(", ")));
    }
    printer.depth -= 1;

    printer.line("{");
    printer.depth += 1;
    for (idx, member) in declaration.members.iter().enumerate() {
        if idx > 0 {
            printer.blank();
        }
        match member {
            Member::Property(property) => print_property(printer, property),
            Member::Field(member)
            | Member::Method(member)
            | Member::Constructor(member)
            | Member::Other(member) => print_opaque(printer, member),
        }
    }
    printer.depth -= 1;
    printer.line("}");
}

/// Renders a generated declaration as a complete source file.
pub fn print(generated: &GeneratedDeclaration) -> String {
    let mut printer = Printer { out: String::from(HEADER), depth: 0 };
    if generated.nullable_enable {
        printer.line("#nullable enable");
    }
    printer.blank();

    let context = &generated.context;
    for using in &context.usings {
        printer.line(using.trim());
    }
    if !context.usings.is_empty() {
        printer.blank();
    }

    match &context.namespace {
        None => print_declaration(&mut printer, &generated.declaration),
        Some(namespace) if namespace.file_scoped => {
            printer.line(&format!("namespace {};", namespace.name));
            printer.blank();
            print_declaration(&mut printer, &generated.declaration);
        },
        Some(namespace) => {
            printer.line(&format!("namespace {}", namespace.name));
            printer.line("{");
            printer.depth += 1;
            print_declaration(&mut printer, &generated.declaration);
            printer.depth -= 1;
            printer.line("}");
        },
    }
    printer.out
}
