//! Workload trace generator for the kubernetriks simulator.
//!
//! Expands directive files of the form `<count> <template>` into time-ordered traces, one row
//! per pod arrival event.

pub mod config;
pub mod error;
pub mod generator {
    pub mod builder;
    pub mod directive;
    pub mod row;
    pub mod template;
}
pub mod logging;
pub mod report;
pub mod runner;
pub mod test_util {
    pub mod helpers;
}
