// Application layer: request handling shared by the entry points.

pub mod handler;
