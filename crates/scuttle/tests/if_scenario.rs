//! A block used conditionally with a truthy Scales reports the coins.

use std::io::Cursor;

use scuttle::{run, CollectStringSink};

const PROGRAM: &str = "\
use pieces o' eight with scales
open printer
look at pieces o' eight
close printer
use printer with scales
";

#[test]
fn if_reports_coins_when_truthy() {
    let mut sink = CollectStringSink::new();
    run::run_reader(Cursor::new(PROGRAM), false, &mut sink).unwrap();
    assert_eq!(sink.output(), "It's a 1 pieces o' eight\n");
}
