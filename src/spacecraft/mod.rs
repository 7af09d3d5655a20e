pub mod fermi;
pub mod gbm;

pub use fermi::Fermi;
pub use gbm::{Detector, Gbm, DETECTORS};
