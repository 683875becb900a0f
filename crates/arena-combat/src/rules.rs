//! The combat outcome table.
//!
//! The outcome depends on both kinds, so it is a plain function of the pair:
//!
//! | attacker \ defender | Orc   | Knight | Bear  |
//! |---------------------|-------|--------|-------|
//! | Orc                 | false | false  | true  |
//! | Knight              | true  | false  | false |
//! | Bear                | false | true   | false |
//!
//! Same-kind fights never kill, and for any cross-kind pair exactly one
//! direction wins.

use arena_core::Kind;

/// `true` if an `attacker` of this kind kills a `defender` of that kind.
pub fn resolve(attacker: Kind, defender: Kind) -> bool {
    use Kind::*;
    match (attacker, defender) {
        (Orc, Bear) | (Knight, Orc) | (Bear, Knight) => true,
        (Orc, Orc) | (Orc, Knight) => false,
        (Knight, Knight) | (Knight, Bear) => false,
        (Bear, Bear) | (Bear, Orc) => false,
    }
}
