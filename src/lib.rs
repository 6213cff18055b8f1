pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod output;

pub use config::ResponseConfig;
pub use error::{LanczosError, Result};
pub use filter::{
    FilterKind, LanczosFilter, bp_filter, high_filter, low_filter, res_f, sinc, weight_f,
    weight_f_bp,
};
