use crate::ast::Symbol;
use crate::{
    ast_to_demangled_symbol, ast_to_mangled_symbol, demangle, is_mangled, mangled_symbol_to_ast,
    MangledSymbol,
};

mod arbitrary;

use self::arbitrary::GrammarSoup;

quickcheck! {
    fn parsing_mangled_symbol_yields_same_ast(symbol: Symbol) -> bool {
        let mangled = ast_to_mangled_symbol(&symbol);
        match mangled_symbol_to_ast(&mangled) {
            Ok(Some(parsed)) => {
                if symbol != parsed {
                    panic!("Re-parsed symbol differs from the generated one.\n\
                            expected: {:?}\n\
                            actual:   {:?}\n\
                            mangled:  {}\n",
                            symbol,
                            parsed,
                            mangled)
                } else {
                    true
                }
            }
            other => {
                panic!("{:?} - {}", other, mangled)
            }
        }
    }
}

quickcheck! {
    fn demangling_matches_pretty_print(symbol: Symbol) -> bool {
        let mangled = ast_to_mangled_symbol(&symbol);
        let expected = ast_to_demangled_symbol(&symbol);
        let actual = demangle(&mangled);

        if actual != expected {
            panic!("expected: {}\n\
                    actual:   {}\n\
                    mangled:  {}\n",
                    expected,
                    actual,
                    mangled)
        } else {
            true
        }
    }
}

quickcheck! {
    fn demangling_arbitrary_strings_does_not_crash(s: String) -> bool {
        demangle(&s);
        demangle(&format!("_Z{}", s));
        true
    }
}

quickcheck! {
    fn unmangled_strings_are_returned_unchanged(s: String) -> bool {
        is_mangled(&s) || demangle(&s) == s
    }
}

quickcheck! {
    fn failed_parses_return_the_input(soup: GrammarSoup) -> bool {
        let symbol = MangledSymbol::new(&soup.0);
        match symbol.error() {
            Some(_) => symbol.demangled() == soup.0 && symbol.vendor_suffix().is_none(),
            None => symbol.symbol().is_some(),
        }
    }
}

quickcheck! {
    fn demangling_is_deterministic(soup: GrammarSoup) -> bool {
        demangle(&soup.0) == demangle(&soup.0)
    }
}
