//! Position of the observing body.
//!
//! Sky maps need the Earth's place in the Solar System only to apply stellar
//! parallax, where an error of 10⁻³ AU moves even the nearest star by a few
//! microarcseconds. [`EarthEphemeris`] therefore uses the analytic solar
//! theory from Meeus (*Astronomical Algorithms*, ch. 25) instead of a
//! numerical ephemeris file, which keeps the pipeline free of I/O.

pub mod earth;

pub use earth::{EarthEphemeris, EarthPosition};
