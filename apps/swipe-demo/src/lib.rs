//! Headless swipeable list.
//!
//! Hosts one [`SwipeController`](swipe_cell::SwipeController) per list item,
//! configured with the check/list/clock actions on the left and a delete
//! action on the right, and replays scripted gestures against it.

pub mod clock;
pub mod list;
pub mod script;

pub use clock::{FixedStepClock, FrameClock, RealtimeClock};
pub use list::{ListRow, SwipeCompleteListener, SwipeList, ROW_SIZE};
pub use script::{parse_script, Gesture};
