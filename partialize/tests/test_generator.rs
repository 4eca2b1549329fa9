use partialize::{Candidate, GenerationConfig, SourceFile};

fn source_file(raw: serde_json::Value) -> SourceFile {
    SourceFile::from_json_value(raw).unwrap()
}

fn model_declaration(kind: &str, name: &str, marked: bool) -> serde_json::Value {
    let attributes = if marked { serde_json::json!([{ "name": "Partial" }]) } else { serde_json::json!([]) };
    serde_json::json!({
        "kind": kind,
        "name": name,
        "modifiers": ["public"],
        "attributes": attributes,
        "members": [{ "member": "property", "name": "Name", "type": "string", "modifiers": ["public"] }]
    })
}

#[test]
fn test_only_marked_declarations_with_properties_are_generated(){
    let file = source_file(serde_json::json!({
        "namespace": { "name": "App", "file_scoped": true },
        "declarations": [
            model_declaration("class", "Marked", true),
            model_declaration("class", "Unmarked", false),
            model_declaration("interface", "IMarked", true),
            {
                "kind": "class",
                "name": "NoProperties",
                "attributes": [{ "name": "Partial" }],
                "members": [{ "member": "field", "name": "_x", "source": "private int _x;" }]
            }
        ]
    }));

    let generated = partialize::run(&[file]);
    let names: Vec<&str> = generated.iter().map(|file| file.hint_name.as_str()).collect();
    assert_eq!(names, vec!["PartialMarked.g.cs"]);

    let expected = "\
// <auto-generated/>
// Generated by partialize. Changes to this file will be lost when it is regenerated.
#nullable enable

namespace App;

public partial class PartialMarked
{
    public string? Name { get; set; }
}
";
    assert_eq!(generated[0].source, expected);
}

#[test]
fn test_unrecognized_kinds_and_empty_declarations_are_skipped(){
    let file = source_file(serde_json::json!({
        "declarations": [
            model_declaration("enum", "Color", true),
            model_declaration("interface", "IShape", true),
            { "kind": "struct", "name": "Empty", "attributes": [{ "name": "Partial" }] }
        ]
    }));
    for declaration in file.declarations.clone() {
        let candidate = Candidate { context: file.context(), declaration };
        assert_eq!(partialize::generate(&candidate), None);
    }
    assert!(partialize::run(&[file]).is_empty());
}

#[test]
fn test_first_output_wins_on_hint_name_collision(){
    let first = source_file(serde_json::json!({
        "namespace": { "name": "First" },
        "declarations": [model_declaration("class", "Model", true)]
    }));
    let second = source_file(serde_json::json!({
        "namespace": { "name": "Second" },
        "declarations": [model_declaration("record", "Model", true)]
    }));

    let generated = partialize::run(&[first, second]);
    assert_eq!(generated.len(), 1);
    assert!(generated[0].source.contains("namespace First\n"));
}

#[test]
fn test_sibling_declarations_are_dropped(){
    let file = source_file(serde_json::json!({
        "usings": ["using System;", "using System.Text.Json;"],
        "declarations": [
            model_declaration("class", "Model", true),
            model_declaration("class", "Helper", false),
            model_declaration("class", "Other", true)
        ]
    }));

    let generated = partialize::run(&[file]);
    assert_eq!(generated.len(), 2);
    let model = &generated[0].source;
    assert!(model.contains("using System;\nusing System.Text.Json;\n"));
    assert!(model.contains("class PartialModel"));
    assert!(!model.contains("Helper"));
    assert!(!model.contains("Other"));
}

#[test]
fn test_generation_is_deterministic(){
    let raw = serde_json::json!({
        "namespace": { "name": "App" },
        "declarations": [model_declaration("class", "Model", true)]
    });
    let candidate = source_file(raw.clone()).candidates().next().unwrap();
    let config = GenerationConfig::for_type("Model");

    let once = partialize::transform(&candidate, &config);
    let twice = partialize::transform(&candidate, &config);
    assert!(once.is_some());
    assert_eq!(once, twice);
    assert_eq!(partialize::run(&[source_file(raw.clone())]), partialize::run(&[source_file(raw)]));
}

#[test]
fn test_json_round_trip_of_source_file(){
    let file = source_file(serde_json::json!({
        "declarations": [model_declaration("record_struct", "Point", true)]
    }));
    let raw = serde_json::to_string(&file).unwrap();
    assert_eq!(SourceFile::from_json(&raw).unwrap(), file);
}
