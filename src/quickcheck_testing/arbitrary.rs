use crate::ast::*;
use quickcheck::{Arbitrary, Gen};
use rand::Rng;

const VALID_IDENTS: &[&str] = &[
    "foo",
    "_foo",
    "f00",
    "bar_",
    "E",
    "N",
    "S",
    "St",
    "K",
    "v",
    "\u{e9}t\u{e9}",
];

fn gen_valid_ident<G: Gen>(g: &mut G) -> String {
    g.choose(VALID_IDENTS).unwrap().to_string()
}

/// Random bytes from the grammar's alphabet, for exercising error paths.
#[derive(Clone, Debug)]
pub struct GrammarSoup(pub String);

const SOUP: &[u8] = b"0123456789NESKVLPROvbcihjlmxyzaod._";

impl Arbitrary for GrammarSoup {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let len = {
            let s = g.size();
            g.gen_range(0, s + 1)
        };

        let mut soup = "_Z".to_string();
        for _ in 0..len {
            soup.push(*g.choose(SOUP).unwrap() as char);
        }

        GrammarSoup(soup)
    }
}

impl Arbitrary for Abbreviation {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        Abbreviation::ALL[g.next_u32() as usize % Abbreviation::ALL.len()]
    }
}

impl Arbitrary for NameSegment {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        match g.next_u32() % 4 {
            0 => NameSegment::Abbreviation(Arbitrary::arbitrary(g)),
            _ => NameSegment::Ident(gen_valid_ident(g)),
        }
    }
}

impl Arbitrary for UnscopedName {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        UnscopedName {
            ident: gen_valid_ident(g),
            is_const: Arbitrary::arbitrary(g),
        }
    }
}

impl Arbitrary for ScopedName {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let nested: bool = g.gen();
        let len = g.gen_range(1, 4);

        let mut segments: Vec<NameSegment> = Vec::with_capacity(len);
        for _ in 0..len {
            segments.push(Arbitrary::arbitrary(g));
        }

        // Without `N` the name is only recognized through its abbreviation.
        if !nested {
            segments[0] = NameSegment::Abbreviation(Arbitrary::arbitrary(g));
        }

        ScopedName {
            segments,
            nested,
            is_const: nested && g.gen(),
        }
    }
}

impl Arbitrary for Name {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        match g.next_u32() % 2 {
            0 => Name::Unscoped(Arbitrary::arbitrary(g)),
            1 => Name::Scoped(Arbitrary::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

impl Arbitrary for BuiltinType {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        BuiltinType::ALL[g.next_u32() as usize % BuiltinType::ALL.len()]
    }
}

impl Arbitrary for RefQualifier {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        match g.next_u32() % 3 {
            0 => RefQualifier::Pointer,
            1 => RefQualifier::Reference,
            2 => RefQualifier::RValueReference,
            _ => unreachable!(),
        }
    }
}

impl Arbitrary for CvQualifiers {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        CvQualifiers {
            is_const: g.gen(),
            is_volatile: g.gen(),
        }
    }
}

const MAX_WRAPPER_DEPTH: usize = 3;

fn arbitrary_type<G: Gen>(g: &mut G, depth: usize) -> QualifiedType {
    let kind = match g.next_u32() % 3 {
        0 if depth < MAX_WRAPPER_DEPTH => {
            let qualifier = Arbitrary::arbitrary(g);
            let mut referent = arbitrary_type(g, depth + 1);

            // Pointers and references to references do not exist.
            if referent
                .ref_qualifier()
                .map_or(false, RefQualifier::is_reference)
            {
                referent.kind = TypeKind::Builtin(Arbitrary::arbitrary(g));
            }

            TypeKind::Wrapper(qualifier, Box::new(referent))
        }
        1 => TypeKind::Named(Arbitrary::arbitrary(g)),
        _ => TypeKind::Builtin(Arbitrary::arbitrary(g)),
    };

    QualifiedType {
        cv: Arbitrary::arbitrary(g),
        kind,
    }
}

impl Arbitrary for QualifiedType {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        arbitrary_type(g, 0)
    }
}

fn ends_with_abbreviated_scope(ty: &QualifiedType) -> bool {
    match ty.kind {
        TypeKind::Named(Name::Scoped(ref name)) => !name.nested,
        TypeKind::Wrapper(_, ref referent) => ends_with_abbreviated_scope(referent),
        _ => false,
    }
}

fn close_abbreviated_scope(ty: &mut QualifiedType) {
    match ty.kind {
        TypeKind::Named(Name::Scoped(ref mut name)) => name.nested = true,
        TypeKind::Wrapper(_, ref mut referent) => close_abbreviated_scope(referent),
        _ => {}
    }
}

/// Whether an abbreviation-led scope right before `ty` would swallow the
/// start of its encoding as further segments.
fn continues_scope(ty: &QualifiedType) -> bool {
    let mut mangled = String::new();
    ty.mangle(&mut mangled);

    let bytes = mangled.as_bytes();
    match bytes.first() {
        Some(byte) if byte.is_ascii_digit() => true,
        Some(b'L') => bytes.get(1).map_or(false, u8::is_ascii_digit),
        Some(b'S') => bytes
            .get(1)
            .map_or(false, |&code| Abbreviation::from_code(code).is_some()),
        _ => false,
    }
}

impl Arbitrary for ParameterList {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let len = g.gen_range(1, 5);

        let mut params: Vec<QualifiedType> = Vec::with_capacity(len);
        for _ in 0..len {
            params.push(Arbitrary::arbitrary(g));
        }

        for i in 1..params.len() {
            if ends_with_abbreviated_scope(&params[i - 1]) && continues_scope(&params[i]) {
                close_abbreviated_scope(&mut params[i - 1]);
            }
        }

        ParameterList(params)
    }
}

impl Arbitrary for Symbol {
    fn arbitrary<G: Gen>(g: &mut G) -> Self {
        let mut name: Name = Arbitrary::arbitrary(g);
        let params: Option<ParameterList> = if g.gen() {
            Some(Arbitrary::arbitrary(g))
        } else {
            None
        };

        if let Name::Scoped(ref mut scoped) = name {
            if let Some(ref params) = params {
                if !scoped.nested && continues_scope(&params[0]) {
                    scoped.nested = true;
                }
            }
        }

        Symbol {
            name,
            params,
            is_const: g.gen(),
            vendor_suffix: Arbitrary::arbitrary(g),
        }
    }
}
