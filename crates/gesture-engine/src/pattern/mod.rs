pub mod compare;
pub mod descriptor;
pub mod resample;
