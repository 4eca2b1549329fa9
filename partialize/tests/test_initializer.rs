use partialize::{Expr, GeneratedFile, Member, SourceFile};

fn generate_one(raw: serde_json::Value) -> GeneratedFile {
    let file = SourceFile::from_json_value(raw).unwrap();
    let mut generated = partialize::run(&[file]);
    assert_eq!(generated.len(), 1);
    generated.remove(0)
}

fn model(kind: &str, modifiers: &[&str], name_attributes: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "declarations": [{
            "kind": kind,
            "name": "Model",
            "modifiers": modifiers,
            "attributes": [{ "name": "Partial" }],
            "members": [
                {
                    "member": "property",
                    "name": "Name",
                    "type": "string",
                    "modifiers": ["public"],
                    "initializer": "\"John Doe\"",
                    "body": { "accessors": [{ "kind": "get" }, { "kind": "init" }] },
                    "attributes": name_attributes
                },
                {
                    "member": "constructor",
                    "name": "Model",
                    "source": "public Model(string name)\n{\n    Name = name;\n}"
                }
            ]
        }]
    })
}

fn constructors(generated: &GeneratedFile) -> Vec<&Member> {
    generated.declaration.declaration.members.iter()
        .filter(|member| matches!(member, Member::Constructor(_)))
        .collect()
}

fn name_property(generated: &GeneratedFile) -> &partialize::PropertyMember {
    match &generated.declaration.declaration.members[0] {
        Member::Property(property) => property,
        other => panic!("expected Name first, found {other:?}"),
    }
}

#[test]
fn test_readonly_struct_with_initializer_gets_constructor(){
    let generated = generate_one(model(
        "struct",
        &["public", "readonly"],
        serde_json::json!([{ "name": "IncludeInitializer" }]),
    ));

    let name = name_property(&generated);
    assert_eq!(name.ty.to_string(), "string");
    assert_eq!(name.initializer, Some(Expr::new("\"John Doe\"")));
    assert_eq!(constructors(&generated).len(), 1);

    let expected_body = "\
public readonly partial struct PartialModel
{
    public string Name { get; init; } = \"John Doe\";

    public PartialModel()
    {
    }
}
";
    assert!(generated.source.ends_with(expected_body), "{}", generated.source);
}

#[test]
fn test_struct_without_marker_gets_no_constructor(){
    let generated = generate_one(model("struct", &["public", "readonly"], serde_json::json!([])));

    let name = name_property(&generated);
    assert_eq!(name.ty.to_string(), "string?");
    assert_eq!(name.initializer, None);
    // the original's own constructor is not a trigger and is not carried over
    assert!(constructors(&generated).is_empty());
}

#[test]
fn test_record_struct_with_initializer_gets_constructor(){
    let generated = generate_one(model(
        "record_struct",
        &["public"],
        serde_json::json!([{ "name": "IncludeInitializerAttribute" }]),
    ));
    assert_eq!(constructors(&generated).len(), 1);
    assert!(generated.source.contains("public partial record struct PartialModel\n"));
}

#[test]
fn test_classes_never_get_a_constructor(){
    for kind in ["class", "record"] {
        let generated = generate_one(model(kind, &["public"], serde_json::json!([{ "name": "IncludeInitializer" }])));
        let name = name_property(&generated);
        assert_eq!(name.initializer, Some(Expr::new("\"John Doe\"")));
        assert!(constructors(&generated).is_empty(), "{kind} got a constructor");
    }
}

#[test]
fn test_marker_without_initializer_wraps(){
    let generated = generate_one(serde_json::json!({
        "declarations": [{
            "kind": "struct",
            "name": "Model",
            "attributes": [{ "name": "Partial" }],
            "members": [{
                "member": "property",
                "name": "Name",
                "type": "string",
                "attributes": [{ "name": "IncludeInitializer" }]
            }]
        }]
    }));
    let name = name_property(&generated);
    assert_eq!(name.ty.to_string(), "string?");
    assert!(constructors(&generated).is_empty());
}

#[test]
fn test_include_initializer_prefix_is_case_sensitive(){
    let generated = generate_one(model("class", &["public"], serde_json::json!([{ "name": "includeInitializer" }])));
    let name = name_property(&generated);
    assert_eq!(name.ty.to_string(), "string?");
    assert_eq!(name.initializer, None);
}
