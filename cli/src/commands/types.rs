//! The `types` command - list the tol scalar types and their C renderings.

use tol_emit::ElemType;

/// The sized tol scalars, in declaration order.
const SCALARS: &[ElemType] = &[
    ElemType::I8,
    ElemType::I16,
    ElemType::I32,
    ElemType::I64,
    ElemType::ISukat,
    ElemType::U8,
    ElemType::U16,
    ElemType::U32,
    ElemType::U64,
    ElemType::USukat,
    ElemType::Lutang,
    ElemType::DobleTang,
    ElemType::Bool,
    ElemType::Kar,
];

/// Run the types command.
pub fn run() {
    println!("{:<12} {:<12} {}", "tol", "C", "array struct");
    for ty in SCALARS {
        println!("{:<12} {:<12} {}", ty.to_string(), ty.c_name(), ty.struct_name());
    }
}
