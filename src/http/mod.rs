//! Outbound GET transport used by the load driver.
mod client;


pub use client::{HttpGet, HttpResponse, ReqwestClient};
