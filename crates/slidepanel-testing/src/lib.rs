//! Testing utilities and harness for slidepanel drawers

pub mod recorder;
pub mod rule;

pub use recorder::{HistoryOp, OpenStateRecorder, RecordingHistory};
pub use rule::{DrawerTestRule, FRAME_NANOS};

/// Routes `log` output through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub mod prelude {
    pub use crate::init_logging;
    pub use crate::recorder::*;
    pub use crate::rule::*;
}
