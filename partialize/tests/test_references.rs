use partialize::{Attribute, Candidate, DeclKind, GenerationConfig, Member, PropertyMember, TypeDeclaration, TypeExpr};

fn transform_property(property: PropertyMember) -> PropertyMember {
    let mut declaration = TypeDeclaration::new(DeclKind::Class, "Customer");
    declaration.members.push(Member::Property(property));
    let candidate = Candidate { context: Default::default(), declaration };

    let generated = partialize::transform(&candidate, &GenerationConfig::for_type("Customer")).unwrap();
    match generated.declaration.members.into_iter().next() {
        Some(Member::Property(property)) => property,
        other => panic!("expected a property, found {other:?}"),
    }
}

fn addresses() -> PropertyMember {
    PropertyMember::new("Addresses", syn::parse_quote!(Dictionary<string, List<Address>>))
}

#[test]
fn test_reference_is_replaced_inside_generic_arguments(){
    let mut property = addresses();
    property.attributes.push(
        Attribute::new("PartialReference")
            .positional("typeof(Address)")
            .positional("typeof(PartialAddress)"),
    );

    let output = transform_property(property);
    let expected: TypeExpr = syn::parse_quote!(Dictionary<string, List<PartialAddress>>?);
    assert_eq!(output.ty, expected);
    assert_eq!(output.name, "Addresses");
}

#[test]
fn test_reference_renames_property(){
    let positional = Attribute::new("PartialReferenceAttribute")
        .positional("typeof(Address)")
        .positional("typeof(PartialAddress)")
        .positional("\"AddressPatches\"");
    let named = Attribute::new("PartialReference")
        .positional("nameof(Address)")
        .positional("\"PartialAddress\"")
        .named("PropertyName", "nameof(AddressPatches)");

    for attribute in [positional, named] {
        let mut property = addresses();
        property.attributes.push(attribute);

        let output = transform_property(property);
        assert_eq!(output.name, "AddressPatches");
        assert_eq!(output.ty.to_string(), "Dictionary<string, List<PartialAddress>>?");
    }
}

#[test]
fn test_required_reference_is_rewritten_but_not_wrapped(){
    let mut property = PropertyMember::new("Home", syn::parse_quote!(Address));
    property.attributes.push(Attribute::new("Required"));
    property.attributes.push(
        Attribute::new("PartialReference")
            .positional("typeof(Address)")
            .positional("typeof(PartialAddress)"),
    );

    let output = transform_property(property);
    let expected: TypeExpr = syn::parse_quote!(PartialAddress);
    assert_eq!(output.ty, expected);
}

#[test]
fn test_unparsable_mapping_leaves_type_alone(){
    let mut property = PropertyMember::new("Home", syn::parse_quote!(Address));
    property.attributes.push(
        Attribute::new("PartialReference")
            .positional("typeof(Address)"),
    );
    property.attributes.push(
        Attribute::new("PartialReference")
            .positional("GetType()")
            .positional("typeof(PartialAddress)"),
    );

    let output = transform_property(property);
    assert_eq!(output.ty.to_string(), "Address?");
    assert_eq!(output.name, "Home");
}

#[test]
fn test_match_is_by_name_only(){
    let mut property = PropertyMember::new("Pages", syn::parse_quote!(Page<Address>[]));
    property.attributes.push(
        Attribute::new("PartialReference")
            .positional("typeof(Page<>)")
            .positional("typeof(PartialPage<>)"),
    );

    let output = transform_property(property);
    assert_eq!(output.ty.to_string(), "PartialPage<Address>[]?");
}

#[test]
fn test_nullable_replacement_keeps_a_single_wrapper(){
    let mut property = PropertyMember::new("Home", syn::parse_quote!(Address));
    property.attributes.push(
        Attribute::new("PartialReference")
            .positional("typeof(Address)")
            .positional("\"PartialAddress?\""),
    );

    let output = transform_property(property);
    let expected: TypeExpr = syn::parse_quote!(PartialAddress?);
    assert_eq!(output.ty, expected);
    assert_eq!(output.ty.to_string(), "PartialAddress?");
}
