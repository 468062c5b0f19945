pub mod calibration;
pub mod config;
pub mod consts;
pub mod error;
pub mod frame;
pub mod io;
pub mod profile;
pub mod region;
pub mod resample;
pub mod state;
