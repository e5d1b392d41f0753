//! Re-encoding of parsed symbols into their canonical mangled form.
//!
//! The canonical form uses the `_Z` prefix and drops markers the parser
//! ignores, such as `L` inside `N...E`. Parsing the output again yields an
//! equal `Symbol`.

use crate::ast::*;

impl Abbreviation {
    pub fn mangle(&self, out: &mut String) {
        out.push_str(self.code());
    }
}

fn mangle_ident(ident: &str, out: &mut String) {
    out.push_str(&ident.len().to_string());
    out.push_str(ident);
}

impl NameSegment {
    pub fn mangle(&self, out: &mut String) {
        match *self {
            NameSegment::Ident(ref ident) => mangle_ident(ident, out),
            NameSegment::Abbreviation(abbreviation) => abbreviation.mangle(out),
        }
    }
}

impl UnscopedName {
    pub fn mangle(&self, out: &mut String) {
        if self.is_const {
            out.push('L');
        }
        mangle_ident(&self.ident, out);
    }
}

impl ScopedName {
    pub fn mangle(&self, out: &mut String) {
        if self.nested {
            out.push('N');
            if self.is_const {
                out.push('K');
            }
        }

        for segment in &self.segments {
            segment.mangle(out);
        }

        if self.nested {
            out.push('E');
        }
    }
}

impl Name {
    pub fn mangle(&self, out: &mut String) {
        match *self {
            Name::Unscoped(ref name) => name.mangle(out),
            Name::Scoped(ref name) => name.mangle(out),
        }
    }
}

impl BuiltinType {
    pub fn mangle(&self, out: &mut String) {
        out.push(self.code() as char);
    }
}

impl RefQualifier {
    pub fn mangle(&self, out: &mut String) {
        out.push(match *self {
            RefQualifier::Pointer => 'P',
            RefQualifier::Reference => 'R',
            RefQualifier::RValueReference => 'O',
        });
    }
}

impl QualifiedType {
    pub fn mangle(&self, out: &mut String) {
        if self.cv.is_const {
            out.push('K');
        }
        if self.cv.is_volatile {
            out.push('V');
        }

        match self.kind {
            TypeKind::Builtin(builtin) => builtin.mangle(out),
            TypeKind::Named(ref name) => name.mangle(out),
            TypeKind::Wrapper(qualifier, ref referent) => {
                qualifier.mangle(out);
                referent.mangle(out);
            }
        }
    }
}

impl ParameterList {
    pub fn mangle(&self, out: &mut String) {
        for param in self.iter() {
            param.mangle(out);
        }
    }
}

impl Symbol {
    pub fn mangle(&self, out: &mut String) {
        out.push_str("_Z");

        if self.is_const {
            out.push('K');
        }

        self.name.mangle(out);

        if let Some(ref params) = self.params {
            params.mangle(out);
        }

        if let Some(ref suffix) = self.vendor_suffix {
            out.push('.');
            out.push_str(suffix);
        }
    }
}
