use hashbrown::HashSet;
use tracing::debug;

use crate::{ElemType, EmitError};

/// Include-guard macro, matching the shipped runtime helper.
const GUARD: &str = "__TOL_HELPER_H__";

/// The struct-generator macro, verbatim from the runtime helper header.
const DEFINE_MACRO: &str = "#define DEFINE_TOL_ARRAY_STRUCT(type) \\
    typedef struct TOL_Array_##type { \\
        type *data; \\
        size_t len; \\
    } TOL_Array_##type;
";

/// Collects the element types a compiled program stores in arrays and
/// renders the runtime helper header for them.
///
/// Registration order is emission order, after deduplication; the inner
/// type of a nested array is registered before the outer one, so every
/// typedef is declared before the instantiation that uses it.
///
/// # Example
///
/// ```
/// use tol_emit::{ElemType, HeaderEmitter};
///
/// let mut emitter = HeaderEmitter::new();
/// emitter.register(ElemType::Kar).unwrap();
/// assert!(emitter.emit().contains("DEFINE_TOL_ARRAY_STRUCT(char)"));
/// ```
#[derive(Debug, Default)]
pub struct HeaderEmitter {
    seen: HashSet<ElemType>,
    types: Vec<ElemType>,
}

impl HeaderEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `ty` for emission, validating any `bagay` names it
    /// carries. Duplicates are ignored; nested arrays pull their element
    /// types in first.
    pub fn register(&mut self, ty: ElemType) -> Result<(), EmitError> {
        ty.validate()?;
        self.push_deduped(ty);
        Ok(())
    }

    /// The registered element types, in emission order.
    pub fn registered(&self) -> &[ElemType] {
        &self.types
    }

    fn push_deduped(&mut self, ty: ElemType) {
        if self.seen.contains(&ty) {
            return;
        }
        if let ElemType::Array(inner) = &ty {
            self.push_deduped((**inner).clone());
        }
        debug!(ty = %ty, c = %ty.c_name(), "registering array element type");
        self.seen.insert(ty.clone());
        self.types.push(ty);
    }

    /// Renders the helper header: include guard, the includes the
    /// instantiations need, the `DEFINE_TOL_ARRAY_STRUCT` macro, and one
    /// instantiation per registered element type.
    pub fn emit(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("#ifndef {GUARD}\n"));
        out.push_str(&format!("#define {GUARD}\n\n"));

        // size_t is always needed by the macro itself.
        out.push_str("#include <stddef.h>\n");
        if self.types.iter().any(ElemType::needs_stdint) {
            out.push_str("#include <stdint.h>\n");
        }
        if self.types.iter().any(ElemType::needs_stdbool) {
            out.push_str("#include <stdbool.h>\n");
        }
        out.push('\n');

        out.push_str(DEFINE_MACRO);
        out.push('\n');

        for ty in &self.types {
            out.push_str(&format!("DEFINE_TOL_ARRAY_STRUCT({})\n", ty.c_name()));
        }

        out.push_str(&format!("\n#endif // !{GUARD}\n"));
        out
    }
}
