pub mod design;
pub mod response;
pub mod sinc;
pub mod weights;

pub use design::{FilterKind, LanczosFilter, frequency_grid, ideal_response};
pub use response::{bp_filter, high_filter, low_filter, res_f};
pub use sinc::sinc;
pub use weights::{minimum_bandpass_taps, weight_f, weight_f_bp};
