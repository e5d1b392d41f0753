use crate::ast::*;
use std::fmt;

impl ScopedName {
    fn pretty_print_path(&self, out: &mut String) {
        out.push_str(&self.components().collect::<Vec<_>>().join("::"));
    }
}

impl Name {
    /// Print the name without its trailing ` const`.
    pub fn pretty_print_path(&self, out: &mut String) {
        match *self {
            Name::Unscoped(ref name) => out.push_str(&name.ident),
            Name::Scoped(ref name) => name.pretty_print_path(out),
        }
    }

    pub fn pretty_print(&self, out: &mut String) {
        self.pretty_print_path(out);

        if self.is_const() {
            out.push_str(" const");
        }
    }
}

impl BuiltinType {
    pub fn pretty_print(&self, out: &mut String) {
        out.push_str(match *self {
            BuiltinType::Void => "void",
            BuiltinType::Bool => "bool",
            BuiltinType::Char => "char",
            BuiltinType::SChar => "signed char",
            BuiltinType::UChar => "unsigned char",
            BuiltinType::WChar => "wchar_t",
            BuiltinType::Short => "short",
            BuiltinType::UShort => "unsigned short",
            BuiltinType::Int => "int",
            BuiltinType::UInt => "unsigned int",
            BuiltinType::Long => "long",
            BuiltinType::ULong => "unsigned long",
            BuiltinType::LongLong => "long long",
            BuiltinType::ULongLong => "unsigned long long",
            BuiltinType::Int128 => "__int128",
            BuiltinType::UInt128 => "unsigned __int128",
            BuiltinType::Float => "float",
            BuiltinType::Double => "double",
            BuiltinType::LongDouble => "long double",
            BuiltinType::Float128 => "__float128",
            BuiltinType::Ellipsis => "...",
        });
    }
}

impl RefQualifier {
    pub fn pretty_print(&self, out: &mut String) {
        out.push_str(match *self {
            RefQualifier::Pointer => "*",
            RefQualifier::Reference => "&",
            RefQualifier::RValueReference => "&&",
        });
    }
}

impl QualifiedType {
    pub fn pretty_print(&self, out: &mut String) {
        match self.kind {
            TypeKind::Builtin(builtin) => builtin.pretty_print(out),
            TypeKind::Named(ref name) => name.pretty_print(out),
            TypeKind::Wrapper(qualifier, ref referent) => {
                referent.pretty_print(out);
                qualifier.pretty_print(out);
            }
        }

        if self.cv.is_volatile {
            out.push_str(" volatile");
        }

        if self.cv.is_const {
            out.push_str(" const");
        }
    }
}

impl ParameterList {
    pub fn pretty_print(&self, out: &mut String) {
        if self.is_void() {
            out.push_str("(void)");
            return;
        }

        out.push('(');
        for (i, param) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            param.pretty_print(out);
        }
        out.push(')');
    }
}

impl Symbol {
    /// `<name>[(<params>)][ const]`; the vendor suffix is not printed.
    pub fn pretty_print(&self, out: &mut String) {
        self.name.pretty_print_path(out);

        if let Some(ref params) = self.params {
            params.pretty_print(out);
        }

        if self.is_const_qualified() {
            out.push_str(" const");
        }
    }
}

impl fmt::Display for QualifiedType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut out = String::new();
        self.pretty_print(&mut out);
        f.write_str(&out)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut out = String::new();
        self.pretty_print(&mut out);
        f.write_str(&out)
    }
}
