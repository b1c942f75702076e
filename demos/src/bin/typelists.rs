//! Type-level list operations, checked by the compiler.

use loopforge::assert_type_eq;
use loopforge::logging;
use loopforge::tuple::{same_type, size, Front, NoSuchType, PopFront, PushBack, PushFront};
use tracing::info;

type Fundamentals = (f64, char, bool, f64);

const _: () = assert!(size::<Fundamentals>() == 4);
const _: () = assert!(size::<()>() == 0);

assert_type_eq!(Front<Fundamentals>, f64);
assert_type_eq!(Front<()>, NoSuchType);
assert_type_eq!(PopFront<Fundamentals>, (char, bool, f64));
assert_type_eq!(PopFront<()>, NoSuchType);
assert_type_eq!(PushFront<Fundamentals, char>, (char, f64, char, bool, f64));
assert_type_eq!(PushBack<Fundamentals, char>, (f64, char, bool, f64, char));

fn main() {
    logging::init();

    assert!(same_type::<Front<Fundamentals>, f64>());
    assert!(!same_type::<PopFront<Fundamentals>, Fundamentals>());
    info!(
        size = size::<Fundamentals>(),
        front = std::any::type_name::<Front<Fundamentals>>(),
        pop_front = std::any::type_name::<PopFront<Fundamentals>>(),
        "type list"
    );
}
