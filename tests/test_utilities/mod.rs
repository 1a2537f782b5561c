// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

pub mod http_stub;
pub mod mocks;
