//! Test fixtures for common test scenarios.
//!
//! Pre-built IR libraries shared by the unit tests.

use crate::core::DeclKind;
use crate::ir::{IrConstValue, IrDecl, IrLibrary};

/// `A..G` with `B -> E`, `E -> C`, `C -> A`, `F -> B`; D and G standalone.
pub fn decl_order_library() -> IrLibrary {
    let int32 = |name: &str, value: IrConstValue| IrDecl::constant(name, "int32", value);

    IrLibrary::new("example")
        .with_decl(int32("example/A", IrConstValue::numeric("0")))
        .with_decl(int32("example/B", IrConstValue::identifier("example/E")))
        .with_decl(int32("example/C", IrConstValue::identifier("example/A")))
        .with_decl(int32("example/D", IrConstValue::numeric("1")))
        .with_decl(int32("example/E", IrConstValue::identifier("example/C")))
        .with_decl(int32("example/F", IrConstValue::identifier("example/B")))
        .with_decl(int32("example/G", IrConstValue::numeric("2")))
}

/// One constant of every supported shape, with comments.
pub fn constants_library() -> IrLibrary {
    let lit = |name: &str, ty: &str, text: &str| {
        IrDecl::constant(format!("example/{name}"), ty, IrConstValue::numeric(text))
    };

    IrLibrary::new("example")
        .with_decl(IrDecl::constant("example/BOOL", "bool", IrConstValue::bool(false)))
        .with_decl(lit("BINARY_UINT8", "uint8", "0b10101111"))
        .with_decl(lit("HEX_UINT16", "uint16", "0xabcd"))
        .with_decl(lit("DECIMAL_UINT32", "uint32", "123456789"))
        .with_decl(lit("BINARY_INT8", "int8", "0b1111010"))
        .with_decl(lit("HEX_INT16", "int16", "0xcba"))
        .with_decl(lit("NEGATIVE_HEX_INT16", "int16", "-0xcba"))
        .with_decl(lit("DECIMAL_INT32", "int32", "1050065"))
        .with_decl(lit("NEGATIVE_DECIMAL_INT32", "int32", "-1050065"))
        .with_decl(lit("UINT64_MAX", "uint64", "0xffffffffffffffff"))
        .with_decl(lit("INT64_MIN", "int64", "-0x8000000000000000"))
        .with_decl(IrDecl::constant(
            "example/SOME_STRING",
            "string",
            IrConstValue::string("XXX"),
        ))
        .with_decl(IrDecl::constant(
            "example/DEFINED_IN_TERMS_OF_ANOTHER_STRING",
            "string",
            IrConstValue::identifier("example/SOME_STRING"),
        ))
        .with_decl(IrDecl::constant(
            "example/DEFINED_IN_TERMS_OF_ANOTHER_UINT16",
            "uint16",
            IrConstValue::identifier("example/HEX_UINT16"),
        ))
        .with_decl(
            IrDecl::constant("example/COMMENTED_BOOL", "bool", IrConstValue::bool(true))
                .with_doc_comment(" This is a one-line comment.\n"),
        )
        .with_decl(
            IrDecl::constant("example/COMMENTED_STRING", "string", IrConstValue::string("YYY"))
                .with_doc_comment(" This is\n   a\n       many-line\n comment.\n"),
        )
}

/// Opaque declarations mixed with constants.
///
/// `Point` mentions `Coord` (declared later) and a type from another library.
pub fn mixed_library() -> IrLibrary {
    IrLibrary::new("example")
        .with_decl(IrDecl::opaque(
            "example/Point",
            DeclKind::Struct,
            ["example/Coord", "other/Thing"],
        ))
        .with_decl(IrDecl::constant("example/MAX", "uint32", IrConstValue::numeric("0x10")))
        .with_decl(IrDecl::opaque("example/Coord", DeclKind::Alias, ["example/Unit"]))
        .with_decl(
            IrDecl::opaque("example/Unit", DeclKind::Enum, Vec::<String>::new())
                .with_doc_comment(" # Units\n\n Measurement units.\n"),
        )
        .with_decl(IrDecl::constant(
            "example/LIMIT",
            "uint32",
            IrConstValue::identifier("example/MAX"),
        ))
}
