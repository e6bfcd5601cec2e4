//! A recursive call using Shovel returns computes 8! via coin arithmetic.

use std::io::Cursor;

use scuttle::{run, CollectStringSink};

const PROGRAM: &str = "\
use duplicating contraption with pieces o' eight
use duplicating contraption with pieces o' eight
use duplicating contraption with pieces o' eight
look at pieces o' eight
open factorial
use mysterious object with scales
use dishonest shopkeeper with scales
open base_case
use shovel with pieces o' eight
close base_case
use base_case with scales
use dishonest shopkeeper with scales
open recursive_case
use chromatic triplicator with mysterious object
use red mysterious object with bottles o' grog
use factorial with red mysterious object
use n-licator creator with green mysterious object
use n-licator with red mysterious object
use shovel with red mysterious object
close recursive_case
use recursive_case with scales
close factorial
use factorial with pieces o' eight
look at pieces o' eight
";

#[test]
fn factorial_of_eight_via_recursion() {
    let mut sink = CollectStringSink::new();
    run::run_reader(Cursor::new(PROGRAM), false, &mut sink).unwrap();
    assert_eq!(
        sink.output(),
        "It's a 8 pieces o' eight\nIt's a 40320 pieces o' eight\n"
    );
}
