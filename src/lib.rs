#![allow(non_snake_case)]

pub mod cli;
pub mod clients;
pub mod config;
pub mod credentials;
pub mod error;
pub mod models;
pub mod render;
pub mod runtime;
pub mod service;
