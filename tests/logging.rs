//! Logger installation. Kept in its own test binary so no other test installs a logger first.

use pycol_marshal::logging::init_logging;
use pycol_marshal::marshal::view_as_vector;

#[test]
fn init_logging_installs_once() {
    assert!(init_logging("error,pycol_marshal=trace"));
    assert!(!init_logging("error"));

    // Conversions log through the installed logger without affecting results.
    let v = view_as_vector(&[1.0, 2.0], 2).unwrap();
    assert_eq!(v.len(), 2);
}
