//! Derives "partial" shadow declarations: copies of a type in which most
//! properties become optional, for patch and update payloads.
//!
//! A declaration opts in with the `Partial` marker. For
//! ```text
//! [Partial(Summary = "Patch payload for a user")]
//! public class User
//! {
//!     [Required] public int Id { get; set; }
//!     public string Name { get; set; }
//!     [PartialReference(typeof(Address), typeof(PartialAddress))]
//!     public Address Home { get; set; }
//! }
//! ```
//! the generated `PartialUser.g.cs` holds
//! ```text
//! /// <summary>
//! /// Patch payload for a user
//! /// </summary>
//! public partial class PartialUser
//! {
//!     public int Id { get; set; }
//!
//!     public string? Name { get; set; }
//!
//!     public PartialAddress? Home { get; set; }
//! }
//! ```
//!
//! # Markers
//! ## `Partial(Name?, Summary = .., IncludeRequiredProperties = ..)`
//! On the type. `Name` defaults to `Partial<TypeName>`; `Summary` replaces the
//! inherited documentation; `IncludeRequiredProperties` keeps the `required`
//! keyword.
//!
//! ## `Required...`
//! Any property attribute whose name starts with `Required` (in any case)
//! keeps the property's type non-nullable.
//!
//! ## `IncludeInitializer...`
//! Keeps the property's type and its initializer. Structs that keep an
//! initializer get a parameterless constructor.
//!
//! ## `PartialReference(original, partial, propertyName?)`
//! Replaces `original` with `partial` anywhere in the property's type, and
//! optionally renames the property.
//!
//! Declarations are handed over as [SourceFile]s, usually deserialized from
//! the front end's JSON. [run] generates every file; [print] renders a single
//! [GeneratedDeclaration].

mod generator;
mod printer;

pub use ::partialize_codegen::*;

pub use crate::generator::{GeneratedFile, SourceFile, run};
pub use crate::printer::{HEADER, print};
