/*
[INPUT]:  Per-call routing and transport requirements
[OUTPUT]: Typed request descriptors shared by the HTTP layer
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When request parameters change or new types added
*/

pub mod requests;

pub use requests::*;
