use core::fmt;
use core::str::FromStr;

use crate::EmitError;

/// A tol array element type, as the compiler sees it.
///
/// Covers the sized scalars from the tol type system, user-declared `bagay`
/// aggregates (by their C name), and nested arrays — an array whose
/// elements are themselves `TOL_Array_<type>` views.
///
/// `FromStr` accepts the tol surface spellings (`i32`, `usukat`, `lutang`,
/// `dobletang`, `kar`, …) with a `[]` prefix per level of array nesting;
/// any other identifier parses as a `bagay` name. [`Display`](fmt::Display)
/// round-trips the same spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElemType {
    I8,
    I16,
    I32,
    I64,
    ISukat,
    U8,
    U16,
    U32,
    U64,
    USukat,
    Lutang,
    DobleTang,
    Bool,
    Kar,
    /// A user-declared `bagay` aggregate, by its (validated) C name.
    Bagay(String),
    /// An array whose elements are themselves arrays.
    Array(Box<ElemType>),
}

impl ElemType {
    /// The C type token this element compiles to.
    ///
    /// Nested arrays name the typedef the helper macro produces for the
    /// inner type, so `[]i32` renders as `TOL_Array_int32_t`.
    pub fn c_name(&self) -> String {
        match self {
            ElemType::I8 => "int8_t".to_string(),
            ElemType::I16 => "int16_t".to_string(),
            ElemType::I32 => "int32_t".to_string(),
            ElemType::I64 => "int64_t".to_string(),
            ElemType::ISukat => "ptrdiff_t".to_string(),
            ElemType::U8 => "uint8_t".to_string(),
            ElemType::U16 => "uint16_t".to_string(),
            ElemType::U32 => "uint32_t".to_string(),
            ElemType::U64 => "uint64_t".to_string(),
            ElemType::USukat => "size_t".to_string(),
            ElemType::Lutang => "float".to_string(),
            ElemType::DobleTang => "double".to_string(),
            ElemType::Bool => "bool".to_string(),
            ElemType::Kar => "char".to_string(),
            ElemType::Bagay(name) => name.clone(),
            ElemType::Array(inner) => inner.struct_name(),
        }
    }

    /// Name of the struct `DEFINE_TOL_ARRAY_STRUCT` produces for this
    /// element type (the C macro's `TOL_Array_##type` paste).
    pub fn struct_name(&self) -> String {
        format!("TOL_Array_{}", self.c_name())
    }

    /// Checks that every `bagay` name in this type is usable as a C
    /// identifier in generated code.
    pub(crate) fn validate(&self) -> Result<(), EmitError> {
        match self {
            ElemType::Bagay(name) => validate_bagay_name(name),
            ElemType::Array(inner) => inner.validate(),
            _ => Ok(()),
        }
    }

    /// Whether emitting this type requires `<stdint.h>`.
    pub(crate) fn needs_stdint(&self) -> bool {
        match self {
            ElemType::I8
            | ElemType::I16
            | ElemType::I32
            | ElemType::I64
            | ElemType::U8
            | ElemType::U16
            | ElemType::U32
            | ElemType::U64 => true,
            ElemType::Array(inner) => inner.needs_stdint(),
            _ => false,
        }
    }

    /// Whether emitting this type requires `<stdbool.h>`.
    pub(crate) fn needs_stdbool(&self) -> bool {
        match self {
            ElemType::Bool => true,
            ElemType::Array(inner) => inner.needs_stdbool(),
            _ => false,
        }
    }
}

impl fmt::Display for ElemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElemType::I8 => f.write_str("i8"),
            ElemType::I16 => f.write_str("i16"),
            ElemType::I32 => f.write_str("i32"),
            ElemType::I64 => f.write_str("i64"),
            ElemType::ISukat => f.write_str("isukat"),
            ElemType::U8 => f.write_str("u8"),
            ElemType::U16 => f.write_str("u16"),
            ElemType::U32 => f.write_str("u32"),
            ElemType::U64 => f.write_str("u64"),
            ElemType::USukat => f.write_str("usukat"),
            ElemType::Lutang => f.write_str("lutang"),
            ElemType::DobleTang => f.write_str("dobletang"),
            ElemType::Bool => f.write_str("bool"),
            ElemType::Kar => f.write_str("kar"),
            ElemType::Bagay(name) => f.write_str(name),
            ElemType::Array(inner) => write!(f, "[]{inner}"),
        }
    }
}

impl FromStr for ElemType {
    type Err = EmitError;

    fn from_str(s: &str) -> Result<Self, EmitError> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix("[]") {
            return Ok(ElemType::Array(Box::new(rest.parse()?)));
        }

        Ok(match s {
            "i8" => ElemType::I8,
            "i16" => ElemType::I16,
            "i32" => ElemType::I32,
            "i64" => ElemType::I64,
            "isukat" => ElemType::ISukat,
            "u8" => ElemType::U8,
            "u16" => ElemType::U16,
            "u32" => ElemType::U32,
            "u64" => ElemType::U64,
            "usukat" => ElemType::USukat,
            "lutang" => ElemType::Lutang,
            "dobletang" => ElemType::DobleTang,
            "bool" => ElemType::Bool,
            "kar" => ElemType::Kar,
            "" => return Err(EmitError::EmptyTypeName),
            "wala" => {
                return Err(EmitError::UnsizedElement {
                    name: "wala".to_string(),
                });
            }
            name => {
                validate_bagay_name(name)?;
                ElemType::Bagay(name.to_string())
            }
        })
    }
}

/// C keywords a `bagay` may not be named after.
const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while",
];

fn validate_bagay_name(name: &str) -> Result<(), EmitError> {
    let mut chars = name.chars();
    let leading_ok = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if !leading_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(EmitError::InvalidIdent {
            name: name.to_string(),
        });
    }

    // `TOL_`-prefixed names collide with generated typedefs; `__`-prefixed
    // identifiers belong to the C implementation.
    if name.starts_with("TOL_") || name.starts_with("__") || C_KEYWORDS.contains(&name) {
        return Err(EmitError::ReservedIdent {
            name: name.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::ElemType;
    use crate::EmitError;

    #[test]
    fn scalar_c_names() {
        assert_eq!(ElemType::I8.c_name(), "int8_t");
        assert_eq!(ElemType::ISukat.c_name(), "ptrdiff_t");
        assert_eq!(ElemType::USukat.c_name(), "size_t");
        assert_eq!(ElemType::Lutang.c_name(), "float");
        assert_eq!(ElemType::DobleTang.c_name(), "double");
        assert_eq!(ElemType::Kar.c_name(), "char");
    }

    #[test]
    fn struct_names_paste_like_the_c_macro() {
        assert_eq!(ElemType::I32.struct_name(), "TOL_Array_int32_t");
        assert_eq!(
            ElemType::Array(Box::new(ElemType::I32)).struct_name(),
            "TOL_Array_TOL_Array_int32_t"
        );
    }

    #[test]
    fn parse_round_trips_display() {
        for spelling in [
            "i8", "i16", "i32", "i64", "isukat", "u8", "u16", "u32", "u64", "usukat", "lutang",
            "dobletang", "bool", "kar", "[]i32", "[][]u8", "punto",
        ] {
            let ty: ElemType = spelling.parse().unwrap();
            assert_eq!(ty.to_string(), spelling);
        }
    }

    #[test]
    fn unknown_identifiers_parse_as_bagay() {
        assert_eq!(
            "punto".parse::<ElemType>().unwrap(),
            ElemType::Bagay("punto".to_string())
        );
    }

    #[test]
    fn wala_has_no_array() {
        assert!(matches!(
            "wala".parse::<ElemType>(),
            Err(EmitError::UnsizedElement { .. })
        ));
        assert!(matches!(
            "[]wala".parse::<ElemType>(),
            Err(EmitError::UnsizedElement { .. })
        ));
    }

    #[test]
    fn malformed_bagay_names_are_rejected() {
        assert!(matches!(
            "2d_point".parse::<ElemType>(),
            Err(EmitError::InvalidIdent { .. })
        ));
        assert!(matches!(
            "my type".parse::<ElemType>(),
            Err(EmitError::InvalidIdent { .. })
        ));
        assert!(matches!(
            "".parse::<ElemType>(),
            Err(EmitError::EmptyTypeName)
        ));
    }

    #[test]
    fn reserved_bagay_names_are_rejected() {
        for name in ["struct", "TOL_Array_int8_t", "__internal"] {
            assert!(matches!(
                name.parse::<ElemType>(),
                Err(EmitError::ReservedIdent { .. })
            ));
        }
    }

    #[test]
    fn include_requirements() {
        assert!(ElemType::I8.needs_stdint());
        assert!(!ElemType::Lutang.needs_stdint());
        assert!(ElemType::Bool.needs_stdbool());
        assert!(
            ElemType::Array(Box::new(ElemType::U64)).needs_stdint(),
            "nested arrays inherit their element's includes"
        );
    }
}
