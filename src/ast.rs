//! Parse-tree types for the supported subset of the Itanium C++ mangling
//! grammar.

use std::ops::Deref;

/// The fixed standard-library abbreviations, `St`, `Sa`, `Sb`, `Ss`, `Si`,
/// `So` and `Sd`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Abbreviation {
    Std,
    Allocator,
    BasicString,
    String,
    Istream,
    Ostream,
    Iostream,
}

impl Abbreviation {
    pub const ALL: [Abbreviation; 7] = [
        Abbreviation::Std,
        Abbreviation::Allocator,
        Abbreviation::BasicString,
        Abbreviation::String,
        Abbreviation::Istream,
        Abbreviation::Ostream,
        Abbreviation::Iostream,
    ];

    /// Look up an abbreviation by the byte following its `S`.
    pub fn from_code(code: u8) -> Option<Abbreviation> {
        match code {
            b't' => Some(Abbreviation::Std),
            b'a' => Some(Abbreviation::Allocator),
            b'b' => Some(Abbreviation::BasicString),
            b's' => Some(Abbreviation::String),
            b'i' => Some(Abbreviation::Istream),
            b'o' => Some(Abbreviation::Ostream),
            b'd' => Some(Abbreviation::Iostream),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Abbreviation::Std => "St",
            Abbreviation::Allocator => "Sa",
            Abbreviation::BasicString => "Sb",
            Abbreviation::String => "Ss",
            Abbreviation::Istream => "Si",
            Abbreviation::Ostream => "So",
            Abbreviation::Iostream => "Sd",
        }
    }

    /// The name segments this abbreviation stands for.
    pub fn segments(self) -> &'static [&'static str] {
        match self {
            Abbreviation::Std => &["std"],
            Abbreviation::Allocator => &["std", "allocator"],
            Abbreviation::BasicString => &["std", "basic_string"],
            Abbreviation::String => &[
                "std",
                "basic_string<char,std::char_traits<char>,std::allocator<char>>",
            ],
            Abbreviation::Istream => &["std::basic_istream<char,std::char_traits<char>>"],
            Abbreviation::Ostream => &["std::basic_ostream<char,std::char_traits<char>>"],
            Abbreviation::Iostream => &["std::basic_iostream<char,std::char_traits<char>>"],
        }
    }
}

/// One component of a scoped name.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum NameSegment {
    /// A length-prefixed identifier such as `3foo`.
    Ident(String),
    Abbreviation(Abbreviation),
}

/// A single length-prefixed identifier, optionally marked with `L`.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct UnscopedName {
    pub ident: String,
    pub is_const: bool,
}

/// A sequence of segments, either nested in `N...E` or led by a
/// standard-library abbreviation.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct ScopedName {
    pub segments: Vec<NameSegment>,
    /// Opened with `N` and closed with `E`.
    pub nested: bool,
    /// Set by `K` directly after `N`.
    pub is_const: bool,
}

impl ScopedName {
    /// The segments with abbreviations expanded, in declaration order.
    pub fn components<'a>(&'a self) -> impl Iterator<Item = &'a str> + 'a {
        self.segments.iter().flat_map(|segment| {
            let expanded: Vec<&'a str> = match *segment {
                NameSegment::Ident(ref ident) => vec![ident.as_str()],
                NameSegment::Abbreviation(abbreviation) => abbreviation.segments().to_vec(),
            };
            expanded
        })
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum Name {
    Unscoped(UnscopedName),
    Scoped(ScopedName),
}

impl Name {
    pub fn is_const(&self) -> bool {
        match *self {
            Name::Unscoped(ref name) => name.is_const,
            Name::Scoped(ref name) => name.is_const,
        }
    }
}

/// The built-in type codes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum BuiltinType {
    Void,
    Bool,
    Char,
    SChar,
    UChar,
    WChar,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    ULong,
    LongLong,
    ULongLong,
    Int128,
    UInt128,
    Float,
    Double,
    LongDouble,
    Float128,
    Ellipsis,
}

impl BuiltinType {
    pub const ALL: [BuiltinType; 21] = [
        BuiltinType::Void,
        BuiltinType::Bool,
        BuiltinType::Char,
        BuiltinType::SChar,
        BuiltinType::UChar,
        BuiltinType::WChar,
        BuiltinType::Short,
        BuiltinType::UShort,
        BuiltinType::Int,
        BuiltinType::UInt,
        BuiltinType::Long,
        BuiltinType::ULong,
        BuiltinType::LongLong,
        BuiltinType::ULongLong,
        BuiltinType::Int128,
        BuiltinType::UInt128,
        BuiltinType::Float,
        BuiltinType::Double,
        BuiltinType::LongDouble,
        BuiltinType::Float128,
        BuiltinType::Ellipsis,
    ];

    pub fn from_code(code: u8) -> Option<BuiltinType> {
        BuiltinType::ALL
            .iter()
            .copied()
            .find(|builtin| builtin.code() == code)
    }

    pub fn code(self) -> u8 {
        match self {
            BuiltinType::Void => b'v',
            BuiltinType::Bool => b'b',
            BuiltinType::Char => b'c',
            BuiltinType::SChar => b'a',
            BuiltinType::UChar => b'h',
            BuiltinType::WChar => b'w',
            BuiltinType::Short => b's',
            BuiltinType::UShort => b't',
            BuiltinType::Int => b'i',
            BuiltinType::UInt => b'j',
            BuiltinType::Long => b'l',
            BuiltinType::ULong => b'm',
            BuiltinType::LongLong => b'x',
            BuiltinType::ULongLong => b'y',
            BuiltinType::Int128 => b'n',
            BuiltinType::UInt128 => b'o',
            BuiltinType::Float => b'f',
            BuiltinType::Double => b'd',
            BuiltinType::LongDouble => b'e',
            BuiltinType::Float128 => b'g',
            BuiltinType::Ellipsis => b'z',
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum RefQualifier {
    Pointer,
    Reference,
    RValueReference,
}

impl RefQualifier {
    pub fn is_reference(self) -> bool {
        match self {
            RefQualifier::Pointer => false,
            RefQualifier::Reference | RefQualifier::RValueReference => true,
        }
    }
}

#[derive(Copy, Clone, Default, PartialEq, Eq, Debug, Hash)]
pub struct CvQualifiers {
    pub is_const: bool,
    pub is_volatile: bool,
}

#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum TypeKind {
    Builtin(BuiltinType),
    /// A raw type name, e.g. `N2ns4TypeE`.
    Named(Name),
    /// A pointer or reference to the boxed referent.
    Wrapper(RefQualifier, Box<QualifiedType>),
}

/// One function parameter type.
///
/// The cv-qualifiers belong to the outermost level: for `KPc` they make the
/// pointer const, rendering as `char* const`.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct QualifiedType {
    pub cv: CvQualifiers,
    pub kind: TypeKind,
}

impl QualifiedType {
    pub fn ref_qualifier(&self) -> Option<RefQualifier> {
        match self.kind {
            TypeKind::Wrapper(qualifier, _) => Some(qualifier),
            _ => None,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct ParameterList(pub Vec<QualifiedType>);

impl ParameterList {
    /// True for the single unqualified `v` parameter of `f(void)`.
    pub fn is_void(&self) -> bool {
        match self.0.as_slice() {
            [QualifiedType {
                cv,
                kind: TypeKind::Builtin(BuiltinType::Void),
            }] => *cv == CvQualifiers::default(),
            _ => false,
        }
    }
}

impl Deref for ParameterList {
    type Target = [QualifiedType];

    fn deref(&self) -> &[QualifiedType] {
        &self.0[..]
    }
}

/// A fully parsed mangled symbol.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Symbol {
    pub name: Name,
    /// `None` for variables.
    pub params: Option<ParameterList>,
    /// Set by a `K` directly after the mangling prefix.
    pub is_const: bool,
    /// Everything after the first `.` following the signature, verbatim.
    pub vendor_suffix: Option<String>,
}

impl Symbol {
    pub fn is_function(&self) -> bool {
        self.params.is_some()
    }

    /// Whether the rendered declaration ends in ` const`.
    pub fn is_const_qualified(&self) -> bool {
        self.is_const || self.name.is_const()
    }
}
